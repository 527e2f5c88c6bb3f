use std::f64::consts::TAU;

use crate::random::RandomSource;
use crate::scene::Scene;

/// Durations are divisors in the evaluator; the sampling tail is cut here.
pub const MIN_DURATION_MS: f64 = 1.0;

/// Motion parameters for one particle, fixed at creation.
///
/// Only the position stored behind `visual` changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<H> {
    /// Milliseconds per loop. Always `>= MIN_DURATION_MS`.
    pub duration: f64,
    pub amplitude: f64,
    pub offset_y: f64,
    /// Radians the wave phase sweeps over one loop, roughly a full turn.
    pub arc: f64,
    /// When this particle's current loop began, in the frame clock's domain.
    /// Pushed into the past so the field is not phase locked.
    pub start_time: f64,
    pub z: f64,
    pub visual: H,
}

/// Samples a particle and registers its visual with `scene`.
pub fn create_particle<R, S>(
    rng: &mut R,
    now: f64,
    base_speed: f64,
    scene: &mut S,
) -> Particle<S::Handle>
where
    R: RandomSource + ?Sized,
    S: Scene + ?Sized,
{
    let duration = rng
        .normal(base_speed, base_speed / 10.0)
        .max(MIN_DURATION_MS);
    let amplitude = rng.normal(25.0, 1.0);
    let offset_y = rng.normal(0.0, 12.0);
    let arc = rng.normal(TAU, 0.1);
    let start_time = now - rng.uniform(0.0, base_speed);
    let z = rng.normal(0.0, 8.0);

    let scale = rng.normal(0.7, 0.4) as f32;
    let visual = scene.spawn(scale);

    Particle {
        duration,
        amplitude,
        offset_y,
        arc,
        start_time,
        z,
        visual,
    }
}
