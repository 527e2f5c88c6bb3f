#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Ambient "particle wave": thousands of small spheres drifting right to left
//! across the viewport, each riding its own randomised sine path.
//!
//! The motion model is portable and tested on the host. The WebGL2 driver is
//! only compiled for `wasm32`.

pub mod camera;
pub mod config;
pub mod error;
pub mod field;
pub mod kinematics;
pub mod mesh;
pub mod particle;
pub mod random;
pub mod scene;

pub use camera::Camera;
pub use config::{WaveConfig, BASE_SPEED};
pub use error::ConfigError;
pub use field::ParticleField;
pub use kinematics::move_position;
pub use particle::{create_particle, Particle};
pub use random::RandomSource;
pub use scene::{InstanceBuffer, InstanceSlot, Scene};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm;
