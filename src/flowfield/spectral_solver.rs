// Move unit test into own file
#[cfg(test)]
#[path = "./spectral_solver_test.rs"]
mod spectral_solver_test;

use crate::flowfield::ScalarFieldBatch;
use crate::mesh::fft_helper::{get_inverse_norm_squared, get_k_mesh, FftPlan2D};
use crate::{BoxSize, Float, GridSize};
use ndarray::{Array, ArrayView, Axis, Ix2, Ix3};
use num_complex::Complex;

/// Solves the Poisson equation for the streamfunction of periodic vorticity
/// fields and differentiates streamfunctions into velocity fields, both in
/// Fourier space.
///
/// The wavenumber mesh is computed once at construction and shared by both
/// operations, so solving for a streamfunction and differentiating it
/// afterwards always uses the same grid conventions.
pub struct SpectralSolver {
    fft_plan: FftPlan2D,
    k_mesh: Array<Complex<Float>, Ix3>,
    k_invnormsquared: Array<Complex<Float>, Ix2>,
    norm: Float,
}

impl SpectralSolver {
    pub fn new(grid_size: GridSize, box_size: BoxSize) -> SpectralSolver {
        let mesh = get_k_mesh(grid_size, box_size);

        SpectralSolver {
            k_invnormsquared: get_inverse_norm_squared(mesh.view()),
            k_mesh: mesh,
            fft_plan: FftPlan2D::new(grid_size),
            norm: (grid_size.x * grid_size.y) as Float,
        }
    }

    /// Solves `∇²ψ = −ω` for every sample of a vorticity batch.
    ///
    /// In Fourier space the equation becomes `ψ̂ = ŵ / k²`. The inverse norm
    /// mesh carries a zero at k = 0, which both avoids the singular division
    /// and pins the mean of ψ to zero, fixing the additive constant of the
    /// streamfunction. The imaginary residue of the backward transform is
    /// numerical noise and gets discarded.
    pub fn solve_poisson(&self, vorticity: ArrayView<Float, Ix3>) -> ScalarFieldBatch {
        let mut w = vorticity.map(|&v| Complex::new(v, 0.));
        for mut sample in w.axis_iter_mut(Axis(2)) {
            self.fft_plan.forward(&mut sample);
        }

        let mut psi = &w * &self.k_invnormsquared.view().insert_axis(Axis(2));

        for mut sample in psi.axis_iter_mut(Axis(2)) {
            self.fft_plan.backward(&mut sample);
        }

        psi.map(|v| v.re / self.norm)
    }

    /// Differentiates a streamfunction batch into the velocity components
    /// `u = ∂ψ/∂y`, `v = −∂ψ/∂x`.
    ///
    /// Differentiation is a pointwise multiplication with `i·k` in Fourier
    /// space. The k = 0 mode needs no special handling, multiplying with
    /// zero removes it.
    pub fn velocity(
        &self,
        streamfunction: ArrayView<Float, Ix3>,
    ) -> (ScalarFieldBatch, ScalarFieldBatch) {
        let mut psi = streamfunction.map(|&v| Complex::new(v, 0.));
        for mut sample in psi.axis_iter_mut(Axis(2)) {
            self.fft_plan.forward(&mut sample);
        }

        let kx = self.k_mesh.index_axis(Axis(0), 0).insert_axis(Axis(2));
        let ky = self.k_mesh.index_axis(Axis(0), 1).insert_axis(Axis(2));
        let i = Complex::new(0., 1.);

        let mut u = &psi * &ky * i;
        let mut v = &psi * &kx * (-i);

        for mut sample in u.axis_iter_mut(Axis(2)) {
            self.fft_plan.backward(&mut sample);
        }
        for mut sample in v.axis_iter_mut(Axis(2)) {
            self.fft_plan.backward(&mut sample);
        }

        (
            u.map(|v| v.re / self.norm),
            v.map(|v| v.re / self.norm),
        )
    }
}
