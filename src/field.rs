use crate::config::WaveConfig;
use crate::kinematics::move_position;
use crate::particle::{create_particle, Particle};
use crate::random::RandomSource;
use crate::scene::Scene;

/// Every particle in the effect. Created once; the set never grows or shrinks.
#[derive(Debug)]
pub struct ParticleField<H> {
    particles: Box<[Particle<H>]>,
}

impl<H> ParticleField<H> {
    /// Creates `config.particle_count` particles whose loops are staggered
    /// backwards from `now`.
    pub fn spawn<R, S>(config: &WaveConfig, rng: &mut R, now: f64, scene: &mut S) -> Self
    where
        R: RandomSource + ?Sized,
        S: Scene<Handle = H> + ?Sized,
    {
        let particles: Box<[Particle<H>]> = (0..config.particle_count)
            .map(|_| create_particle(&mut *rng, now, config.base_cycle_ms, &mut *scene))
            .collect();

        log::info!(
            "spawned {} particles, base cycle {} ms",
            particles.len(),
            config.base_cycle_ms
        );

        Self { particles }
    }

    /// Recomputes every position for frame time `time` and hands it to `scene`.
    pub fn tick<S>(&self, time: f64, scene: &mut S)
    where
        S: Scene<Handle = H> + ?Sized,
    {
        for particle in self.particles.iter() {
            scene.set_position(&particle.visual, move_position(particle, time));
        }
    }

    pub fn particles(&self) -> &[Particle<H>] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
