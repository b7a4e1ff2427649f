// Move unit test into own file
#[cfg(test)]
#[path = "./uniform_test.rs"]
mod uniform_test;

use super::Sampler;
use crate::Float;
use ndarray::{Array, Ix2};
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Draws batches of points uniformly from a rectangular domain.
///
/// Rows of the domain array are dimensions, columns are `[min, max]` bounds.
pub struct UniformSampler {
    domain: Array<Float, Ix2>,
    batch_size: usize,
    seed: u64,
}

impl UniformSampler {
    pub fn new(domain: Array<Float, Ix2>, batch_size: usize, seed: u64) -> UniformSampler {
        UniformSampler {
            domain,
            batch_size,
            seed,
        }
    }
}

impl Sampler for UniformSampler {
    type Batch = Array<Float, Ix2>;

    /// Returns `(batch_size, dim)` points, column `j` uniform in
    /// `[domain[j, 0], domain[j, 1])`.
    fn generate(&mut self) -> Array<Float, Ix2> {
        let dim = self.domain.nrows();

        let mut rng = Pcg64Mcg::seed_from_u64(self.seed);
        let range: Uniform<Float> = Uniform::new(0., 1.);

        let mut r = || rng.sample(range);

        let mut batch = Array::zeros((self.batch_size, dim));

        for mut point in batch.outer_iter_mut() {
            for (j, x) in point.iter_mut().enumerate() {
                let min = self.domain[[j, 0]];
                let max = self.domain[[j, 1]];
                *x = min + r() * (max - min);
            }
        }

        batch
    }

    fn seed_mut(&mut self) -> &mut u64 {
        &mut self.seed
    }
}
