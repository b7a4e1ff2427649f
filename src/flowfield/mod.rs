use crate::Float;
use ndarray::{Array, Ix3};

/// Batch of scalar fields sampled on the 2D grid, `field[[x, y, sample]]`.
pub type ScalarFieldBatch = Array<Float, Ix3>;

pub mod spectral_solver;
pub mod vorticity_solver;
