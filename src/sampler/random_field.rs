// Move unit test into own file
#[cfg(test)]
#[path = "./random_field_test.rs"]
mod random_field_test;

use super::Sampler;
use crate::flowfield::ScalarFieldBatch;
use crate::mesh::fft_helper::{get_k_mesh, FftPlan2D};
use crate::{BoxSize, Float, GridSize};
use ndarray::{Array, Axis, Ix2};
use num_complex::Complex;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg64Mcg;

/// Draws batches of mean-free Gaussian random fields with an inverse
/// polynomial spectrum.
///
/// White noise on the grid is shaped in Fourier space by
///
/// ```text
/// amplitude(k) = τ^(α−1) · (|k|² + τ²)^(−α/2)
/// ```
///
/// where `tau` sets the inverse length scale and `alpha` the smoothness of
/// the fields. The k = 0 amplitude is zero, so every sample has zero spatial
/// mean, which is what the streamfunction solver expects of its input.
pub struct GaussianRandomField {
    grid_size: GridSize,
    amplitude: Array<Complex<Float>, Ix2>,
    fft_plan: FftPlan2D,
    batch_size: usize,
    seed: u64,
    norm: Float,
}

impl GaussianRandomField {
    pub fn new(
        grid_size: GridSize,
        box_size: BoxSize,
        tau: Float,
        alpha: Float,
        batch_size: usize,
        seed: u64,
    ) -> GaussianRandomField {
        let mesh = get_k_mesh(grid_size, box_size);
        let k_squared = (&mesh * &mesh).sum_axis(Axis(0));

        let mut amplitude = k_squared.map(|k2| {
            Complex::new(
                tau.powf(alpha - 1.) * (k2.re + tau * tau).powf(-alpha / 2.),
                0.,
            )
        });
        amplitude[[0, 0]] = Complex::new(0., 0.);

        GaussianRandomField {
            grid_size,
            amplitude,
            fft_plan: FftPlan2D::new(grid_size),
            batch_size,
            seed,
            norm: (grid_size.x * grid_size.y) as Float,
        }
    }
}

impl Sampler for GaussianRandomField {
    type Batch = ScalarFieldBatch;

    /// Returns `(nx, ny, batch_size)` independent random fields.
    fn generate(&mut self) -> ScalarFieldBatch {
        let gs = self.grid_size;

        let mut rng = Pcg64Mcg::seed_from_u64(self.seed);

        let mut fields = Array::zeros((gs.x, gs.y, self.batch_size));

        for mut sample in fields.axis_iter_mut(Axis(2)) {
            let mut noise: Array<Complex<Float>, Ix2> =
                Array::from_shape_simple_fn((gs.x, gs.y), || {
                    Complex::new(rng.sample(StandardNormal), 0.)
                });

            self.fft_plan.forward(&mut noise.view_mut());
            noise *= &self.amplitude;
            self.fft_plan.backward(&mut noise.view_mut());

            sample.assign(&noise.map(|v| v.re / self.norm));
        }

        fields
    }

    fn seed_mut(&mut self) -> &mut u64 {
        &mut self.seed
    }
}
