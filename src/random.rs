//! Random sampling seam. Anything implementing [`rand::Rng`] can drive the
//! particle factory; tests use [`seeded`] to get identical fields every run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

pub trait RandomSource {
    /// Uniform sample in `[low, high)`. Returns `low` for an empty range.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Gaussian sample with the given mean and standard deviation.
    fn normal(&mut self, mean: f64, deviation: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high > low {
            self.gen_range(low..high)
        } else {
            low
        }
    }

    fn normal(&mut self, mean: f64, deviation: f64) -> f64 {
        if deviation == 0.0 {
            return mean;
        }
        let z: f64 = self.sample(StandardNormal);
        mean + deviation * z
    }
}

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
