//! Maps `(particle, time)` to a point on the wave.
//!
//! Each particle travels right to left across `[-SWEEP_HALF_WIDTH,
//! SWEEP_HALF_WIDTH]` once per `duration`, bobbing on a sine whose vertical
//! reach narrows quadratically away from the centre. Everything here is
//! memoryless: the same inputs always give the same point.

use glam::Vec3;

use crate::particle::Particle;

pub const SWEEP_HALF_WIDTH: f64 = 150.0;

/// Horizontal distance at which the vertical taper reaches zero. Beyond it
/// the taper goes negative and the wave flips; that silhouette is intended.
pub const TAPER_RADIUS: f64 = 90.0;

/// Milliseconds into the current loop, in `[0, duration)` even when `time`
/// precedes `start_time`.
pub fn elapsed<H>(particle: &Particle<H>, time: f64) -> f64 {
    let e = (time - particle.start_time).rem_euclid(particle.duration);
    // rem_euclid can round up to the divisor for tiny negative operands
    if e >= particle.duration {
        0.0
    } else {
        e
    }
}

/// Runs from 1 at the start of a loop down towards 0 at its end.
pub fn progress<H>(particle: &Particle<H>, time: f64) -> f64 {
    1.0 - elapsed(particle, time) / particle.duration
}

pub fn sweep_x(progress: f64) -> f64 {
    progress * 2.0 * SWEEP_HALF_WIDTH - SWEEP_HALF_WIDTH
}

pub fn shrink_factor(x: f64) -> f64 {
    let d = x.abs() / TAPER_RADIUS;
    1.0 - d * d
}

pub fn move_position<H>(particle: &Particle<H>, time: f64) -> Vec3 {
    let progress = progress(particle, time);
    let x = sweep_x(progress);
    let shrink = shrink_factor(x);

    let amplitude = particle.amplitude * shrink;
    let offset_y = particle.offset_y * shrink;
    let y = -(progress * particle.arc).sin() * amplitude + offset_y;

    Vec3::new(x as f32, y as f32, particle.z as f32)
}
