//! Seeded batch samplers feeding the dataset generator.
//!
//! Every sampler owns its seed and builds a private PCG generator from it on
//! each generation, there is no process-wide random state. Interleaving
//! different samplers or other random draws between calls cannot change a
//! sampler's output.

pub mod metropolis;
pub mod random_field;
pub mod uniform;

/// Capability of producing one batch per call from a seeded generator.
pub trait Sampler {
    /// The batch type produced by one generation.
    type Batch;

    /// Draws one batch with the current seed.
    fn generate(&mut self) -> Self::Batch;

    /// Mutable access to the stored seed.
    fn seed_mut(&mut self) -> &mut u64;

    /// Returns the batch at `index`.
    ///
    /// The index is added to the stored seed, so the seed drifts over the
    /// whole trajectory of calls. A run is reproducible when replayed from
    /// the same initial seed, a single call with the same index is not, the
    /// exception being index 0, which leaves the seed untouched.
    fn batch(&mut self, index: usize) -> Self::Batch {
        *self.seed_mut() += index as u64;
        self.generate()
    }
}
