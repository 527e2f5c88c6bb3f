//! Runtime knobs for the wave. In the browser these come from the canvas'
//! `data-config` attribute, e.g.
//! `<canvas id="c" data-config='{"particleCount": 2000, "baseCycleMs": 15000}'>`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Nominal milliseconds for one particle to cross the screen.
pub const BASE_SPEED: f64 = 20_000.0;

pub const DEFAULT_PARTICLE_COUNT: usize = 1500;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct WaveConfig {
    /// Total particles spawned at startup. Fixed for the lifetime of the field.
    pub particle_count: usize,
    /// Mean loop duration; individual particles deviate by a tenth of this.
    pub base_cycle_ms: f64,
    /// Fixed RNG seed for a reproducible layout. `None` draws from the platform.
    pub seed: Option<u64>,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            base_cycle_ms: BASE_SPEED,
            seed: None,
        }
    }
}

impl WaveConfig {
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let config: WaveConfig = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        if !self.base_cycle_ms.is_finite() || self.base_cycle_ms <= 0.0 {
            return Err(ConfigError::InvalidCycle(self.base_cycle_ms));
        }
        Ok(())
    }
}
