// Move unit test into own file
#[cfg(test)]
#[path = "./vorticity_solver_test.rs"]
mod vorticity_solver_test;

use crate::flowfield::ScalarFieldBatch;
use crate::mesh::fft_helper::{get_inverse_norm_squared, get_k_mesh, FftPlan2D};
use crate::mesh::grid_width::GridWidth;
use crate::{BoxSize, Float, GridSize};
use ndarray::{Array, ArrayView, Axis, Ix2, Ix3, Zip};
use num_complex::Complex;

/// Pseudo-spectral solver for the 2D incompressible Navier-Stokes equations
/// in vorticity form on a periodic box,
///
/// ```text
/// ∂ω/∂t + u·∇ω = ν·∇²ω + f.
/// ```
///
/// The viscous term is treated with a Crank-Nicolson step, advection and
/// forcing are explicit:
///
/// ```text
/// ŵ⁺ = [ŵ·(1 − ν·dt·k²/2) + dt·(N̂ + f̂)] / (1 + ν·dt·k²/2)
/// ```
///
/// The quadratic advection term N = −u·∇ω is formed in physical space from
/// spectral derivatives, with the 2/3 rule suppressing aliasing of the
/// product.
pub struct VorticitySolver {
    fft_plan: FftPlan2D,
    k_mesh: Array<Complex<Float>, Ix3>,
    k_invnormsquared: Array<Complex<Float>, Ix2>,
    dealias: Array<Complex<Float>, Ix2>,
    cn_explicit: Array<Complex<Float>, Ix2>,
    cn_implicit: Array<Complex<Float>, Ix2>,
    forcing: Array<Complex<Float>, Ix2>,
    timestep: Float,
    norm: Float,
}

impl VorticitySolver {
    /// The forcing closure is evaluated once on the grid and transformed, it
    /// enters every timestep as a constant spectral source term.
    pub fn new<F>(
        grid_size: GridSize,
        box_size: BoxSize,
        viscosity: Float,
        timestep: Float,
        forcing: F,
    ) -> VorticitySolver
    where
        F: Fn(Float, Float) -> Float,
    {
        let mesh = get_k_mesh(grid_size, box_size);
        let k_squared = (&mesh * &mesh).sum_axis(Axis(0));

        let cn_explicit =
            k_squared.map(|&k2| Complex::new(1., 0.) - k2 * (viscosity * timestep / 2.));
        let cn_implicit =
            k_squared.map(|&k2| Complex::new(1., 0.) + k2 * (viscosity * timestep / 2.));

        let kx = mesh.index_axis(Axis(0), 0);
        let ky = mesh.index_axis(Axis(0), 1);

        let kx_cut = kx.fold(0., |m: Float, k| m.max(k.re.abs())) * 2. / 3.;
        let ky_cut = ky.fold(0., |m: Float, k| m.max(k.re.abs())) * 2. / 3.;

        let mut dealias = Array::from_elem(k_squared.dim(), Complex::new(1., 0.));
        Zip::from(&mut dealias).and(&kx).and(&ky).for_each(|d, x, y| {
            if x.re.abs() > kx_cut || y.re.abs() > ky_cut {
                *d = Complex::new(0., 0.);
            }
        });

        let gw = GridWidth::new(grid_size, box_size);
        let mut forcing_hat = Array::from_shape_fn((grid_size.x, grid_size.y), |(i, j)| {
            Complex::new(forcing(i as Float * gw.x, j as Float * gw.y), 0.)
        });

        let fft_plan = FftPlan2D::new(grid_size);
        fft_plan.forward(&mut forcing_hat.view_mut());

        VorticitySolver {
            k_invnormsquared: get_inverse_norm_squared(mesh.view()),
            k_mesh: mesh,
            dealias,
            cn_explicit,
            cn_implicit,
            forcing: forcing_hat,
            fft_plan,
            timestep,
            norm: (grid_size.x * grid_size.y) as Float,
        }
    }

    /// Advances the vorticity batch by `n_steps` timesteps and returns
    /// `n_snapshots` equally spaced snapshots, the final state included.
    pub fn run(
        &self,
        vorticity: ArrayView<Float, Ix3>,
        n_steps: usize,
        n_snapshots: usize,
    ) -> Vec<ScalarFieldBatch> {
        let mut w = vorticity.map(|&v| Complex::new(v, 0.));
        for mut sample in w.axis_iter_mut(Axis(2)) {
            self.fft_plan.forward(&mut sample);
        }

        let cn_explicit = self.cn_explicit.view().insert_axis(Axis(2));
        let cn_implicit = self.cn_implicit.view().insert_axis(Axis(2));
        let forcing = self.forcing.view().insert_axis(Axis(2));

        let mut snapshots = Vec::with_capacity(n_snapshots);
        let mut next = 1;

        for step in 1..=n_steps {
            let advection = self.advection(w.view());

            w = (&w * &cn_explicit + (&advection + &forcing) * self.timestep) / &cn_implicit;

            if n_snapshots > 0 && step * n_snapshots >= next * n_steps {
                snapshots.push(self.to_real(&w));
                next += 1;
            }
        }

        snapshots
    }

    /// Returns `N̂ = F[−u·∇ω]`, dealiased with the 2/3 rule.
    fn advection(&self, w: ArrayView<Complex<Float>, Ix3>) -> Array<Complex<Float>, Ix3> {
        let dealias = self.dealias.view().insert_axis(Axis(2));
        let kx = self.k_mesh.index_axis(Axis(0), 0).insert_axis(Axis(2));
        let ky = self.k_mesh.index_axis(Axis(0), 1).insert_axis(Axis(2));
        let i = Complex::new(0., 1.);

        let w_d = &w * &dealias;

        // u = ∂ψ/∂y, v = −∂ψ/∂x with ψ̂ = ŵ/k²
        let psi = &w_d * &self.k_invnormsquared.view().insert_axis(Axis(2));
        let u = self.to_real(&(&psi * &ky * i));
        let v = self.to_real(&(&psi * &kx * (-i)));
        let w_x = self.to_real(&(&w_d * &kx * i));
        let w_y = self.to_real(&(&w_d * &ky * i));

        let nonlinear = -(u * &w_x + v * &w_y);

        let mut advection = nonlinear.map(|&v| Complex::new(v, 0.));
        for mut sample in advection.axis_iter_mut(Axis(2)) {
            self.fft_plan.forward(&mut sample);
        }

        advection * &dealias
    }

    fn to_real(&self, w: &Array<Complex<Float>, Ix3>) -> ScalarFieldBatch {
        let mut w = w.clone();
        for mut sample in w.axis_iter_mut(Axis(2)) {
            self.fft_plan.backward(&mut sample);
        }

        w.map(|v| v.re / self.norm)
    }
}
