// Move unit test into own file
#[cfg(test)]
#[path = "./fft_helper_test.rs"]
mod fft_helper_test;

use super::mesh2d;
use crate::consts::TWOPI;
use crate::{BoxSize, Float, GridSize};
use ndarray::{s, Array, ArrayView, ArrayViewMut, Axis, Ix1, Ix2, Ix3};
use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Returns a sampling of k values along both grid axes in FFT standard form.
///
/// For a grid size of `n`, the 0th-mode is at index `0`. For even n the index
/// `n/2` represents both the largest positive and negative frequency. For odd
/// `n` index `(n-1)/2` is the largest positive frequency and `(n+1)/2` the
/// largest negative frequency. For the values at index `i`, `-i = n-k` holds
/// true.
///
/// Example:
///     n = 10 => k = [0, 1, 2, 3, 4, (5, -5), -4, -3, -2, -1]
///     n = 11 => k = [0, 1, 2, 3, 4, 5, -5, -4, -3, -2, -1]
///
fn get_k_sampling(grid_size: GridSize, box_size: BoxSize) -> Vec<Array<Complex<Float>, Ix1>> {
    let ks: Vec<Array<Complex<Float>, Ix1>> = [grid_size.x, grid_size.y]
        .iter()
        .zip([box_size.x, box_size.y].iter())
        .map(|(&gs, &bs)| {
            let a = (gs / 2) as isize;
            let b = if gs % 2 == 0 { a } else { a + 1 };
            let step = TWOPI / bs;

            let values: Array<Complex<Float>, Ix1> = Array::from_vec(
                (-a..b)
                    .map(|i| Complex::new(i as Float * step, 0.))
                    .collect(),
            );

            let mut k = Array::from_elem(gs, Complex::new(0., 0.));

            k.slice_mut(s![..b]).assign(&values.slice(s![a..]));
            k.slice_mut(s![b..]).assign(&values.slice(s![..a]));

            k
        })
        .collect();

    ks
}

/// Returns a meshgrid of k values for FFT.
///
/// The first axis denotes the components of the k-vector:
///     `res[c, i, j] -> k_c[i, j]`
pub fn get_k_mesh(grid_size: GridSize, box_size: BoxSize) -> Array<Complex<Float>, Ix3> {
    let ks = get_k_sampling(grid_size, box_size);
    mesh2d::<Complex<Float>>(&ks)
}

/// Returns scalar field of inversed norm squared of k-vector-values.
///
/// The inverse norm of k=0 is set to zero, i.e. 1/(k=0)^2 == 0
pub fn get_inverse_norm_squared(
    k_mesh: ArrayView<Complex<Float>, Ix3>,
) -> Array<Complex<Float>, Ix2> {
    let squared = &k_mesh * &k_mesh;

    let mut inorm = squared.sum_axis(Axis(0)).map(|&v| 1. / v);
    inorm[[0, 0]] = Complex::new(0., 0.);

    inorm
}

/// Cached FFT plans for transforming both spatial axes of a 2D field.
///
/// `rustfft` plans are one-dimensional, so the transform runs lane by lane
/// along each axis. Lanes go through a scratch buffer, the batch layout does
/// not keep them contiguous.
pub struct FftPlan2D {
    forward_x: Arc<dyn Fft<Float>>,
    forward_y: Arc<dyn Fft<Float>>,
    backward_x: Arc<dyn Fft<Float>>,
    backward_y: Arc<dyn Fft<Float>>,
}

impl FftPlan2D {
    pub fn new(grid_size: GridSize) -> FftPlan2D {
        let mut planner = FftPlanner::new();

        FftPlan2D {
            forward_x: planner.plan_fft_forward(grid_size.x),
            forward_y: planner.plan_fft_forward(grid_size.y),
            backward_x: planner.plan_fft_inverse(grid_size.x),
            backward_y: planner.plan_fft_inverse(grid_size.y),
        }
    }

    /// Unnormalized forward transform over both axes, in place.
    pub fn forward(&self, field: &mut ArrayViewMut<Complex<Float>, Ix2>) {
        execute(&self.forward_x, &self.forward_y, field);
    }

    /// Unnormalized backward transform over both axes, in place. The caller
    /// divides by the number of grid points.
    pub fn backward(&self, field: &mut ArrayViewMut<Complex<Float>, Ix2>) {
        execute(&self.backward_x, &self.backward_y, field);
    }
}

fn execute(
    fft_x: &Arc<dyn Fft<Float>>,
    fft_y: &Arc<dyn Fft<Float>>,
    field: &mut ArrayViewMut<Complex<Float>, Ix2>,
) {
    let (nx, ny) = field.dim();
    let mut scratch = vec![Complex::new(0., 0.); nx.max(ny)];

    for mut lane in field.lanes_mut(Axis(0)) {
        let buffer = &mut scratch[..nx];
        for (b, v) in buffer.iter_mut().zip(lane.iter()) {
            *b = *v;
        }
        fft_x.process(buffer);
        for (v, b) in lane.iter_mut().zip(buffer.iter()) {
            *v = *b;
        }
    }

    for mut lane in field.lanes_mut(Axis(1)) {
        let buffer = &mut scratch[..ny];
        for (b, v) in buffer.iter_mut().zip(lane.iter()) {
            *b = *v;
        }
        fft_y.process(buffer);
        for (v, b) in lane.iter_mut().zip(buffer.iter()) {
            *v = *b;
        }
    }
}
