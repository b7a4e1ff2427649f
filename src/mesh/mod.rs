use ndarray::{Array, Axis, Ix1, Ix3};

pub mod fft_helper;
pub mod grid_width;

/// Returns a meshgrid built from samplings of both grid axes.
///
/// The first axis denotes the components of the k-vector:
///     `res[c, i, j] -> k_c[i, j]`
pub fn mesh2d<T: Clone + Default>(k: &[Array<T, Ix1>]) -> Array<T, Ix3> {
    let sh_x = k[0].len();
    let sh_y = k[1].len();

    let mut res = Array::from_elem([2, sh_x, sh_y], T::default());

    // first component varies along first axis of field
    for (kx, mut x) in k[0]
        .iter()
        .zip(res.index_axis_mut(Axis(0), 0).axis_iter_mut(Axis(0)))
    {
        x.fill(kx.clone());
    }

    // second component varies along second axis of field
    for (ky, mut y) in k[1]
        .iter()
        .zip(res.index_axis_mut(Axis(0), 1).axis_iter_mut(Axis(1)))
    {
        y.fill(ky.clone());
    }

    res
}
