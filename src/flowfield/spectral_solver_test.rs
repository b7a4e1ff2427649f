#![allow(clippy::float_cmp)]
use super::*;

use crate::consts::TWOPI;
use crate::mesh::grid_width::GridWidth;
use crate::test_helper::equal_floats_eps;
use ndarray::Array;

// Tolerance for values that went through a full transform round trip.
const EPS: Float = 1e-9;

fn square_box() -> (GridSize, BoxSize) {
    (
        GridSize { x: 32, y: 32 },
        BoxSize { x: TWOPI, y: TWOPI },
    )
}

/// Fills a one-sample batch with values of `f(x, y)` on the grid.
fn field_from_fn<F>(grid_size: GridSize, box_size: BoxSize, f: F) -> ScalarFieldBatch
where
    F: Fn(Float, Float) -> Float,
{
    let gw = GridWidth::new(grid_size, box_size);

    Array::from_shape_fn((grid_size.x, grid_size.y, 1), |(i, j, _)| {
        f(i as Float * gw.x, j as Float * gw.y)
    })
}

#[test]
fn poisson_single_modes() {
    let (gs, bs) = square_box();
    let solver = SpectralSolver::new(gs, bs);
    let gw = GridWidth::new(gs, bs);

    // two samples in one batch, solved independently:
    //     ω₀ = sin(x)·sin(y)    =>  ψ₀ = ω₀ / 2
    //     ω₁ = sin(2x)·sin(y)   =>  ψ₁ = ω₁ / 5
    let mut vorticity = Array::zeros((gs.x, gs.y, 2));
    for ((i, j, s), w) in vorticity.indexed_iter_mut() {
        let x = i as Float * gw.x;
        let y = j as Float * gw.y;
        *w = match s {
            0 => x.sin() * y.sin(),
            _ => (2. * x).sin() * y.sin(),
        };
    }

    let psi = solver.solve_poisson(vorticity.view());

    for ((i, j, s), p) in psi.indexed_iter() {
        let expected = match s {
            0 => vorticity[[i, j, 0]] / 2.,
            _ => vorticity[[i, j, 1]] / 5.,
        };
        assert!(
            equal_floats_eps(*p, expected, EPS),
            "ψ[{}, {}, {}] = {} != {}",
            i,
            j,
            s,
            p,
            expected
        );
    }
}

#[test]
fn poisson_output_has_zero_mean() {
    let (gs, bs) = square_box();
    let solver = SpectralSolver::new(gs, bs);

    // mean of the input is 1, the zero mode of ψ is forced to vanish anyway
    let vorticity = field_from_fn(gs, bs, |x, _| 1. + x.sin());
    let psi = solver.solve_poisson(vorticity.view());

    let mean = psi.mean().unwrap();
    assert!(equal_floats_eps(mean, 0., EPS), "mean = {}", mean);
}

#[test]
fn velocity_of_constant_streamfunction_vanishes() {
    let (gs, bs) = square_box();
    let solver = SpectralSolver::new(gs, bs);

    let psi = field_from_fn(gs, bs, |_, _| 0.7);
    let (u, v) = solver.velocity(psi.view());

    for value in u.iter().chain(v.iter()) {
        assert!(equal_floats_eps(*value, 0., EPS), "{} != 0", value);
    }
}

#[test]
fn velocity_matches_analytic_derivatives() {
    // different box lengths per axis to catch swapped grid axes
    let gs = GridSize { x: 32, y: 16 };
    let bs = BoxSize {
        x: TWOPI,
        y: TWOPI / 2.,
    };
    let solver = SpectralSolver::new(gs, bs);
    let gw = GridWidth::new(gs, bs);

    let kx = TWOPI / bs.x;
    let ky = TWOPI / bs.y;

    // ψ = sin(2πx/Lx)·cos(2πy/Ly)
    let psi = field_from_fn(gs, bs, |x, y| (kx * x).sin() * (ky * y).cos());
    let (u, v) = solver.velocity(psi.view());

    for ((i, j, _), value) in u.indexed_iter() {
        let x = i as Float * gw.x;
        let y = j as Float * gw.y;
        let expected = -ky * (kx * x).sin() * (ky * y).sin();
        assert!(
            equal_floats_eps(*value, expected, EPS),
            "u[{}, {}] = {} != {}",
            i,
            j,
            value,
            expected
        );
    }

    for ((i, j, _), value) in v.indexed_iter() {
        let x = i as Float * gw.x;
        let y = j as Float * gw.y;
        let expected = -kx * (kx * x).cos() * (ky * y).cos();
        assert!(
            equal_floats_eps(*value, expected, EPS),
            "v[{}, {}] = {} != {}",
            i,
            j,
            value,
            expected
        );
    }
}

#[test]
fn poisson_and_velocity_compose() {
    let (gs, bs) = square_box();
    let solver = SpectralSolver::new(gs, bs);
    let gw = GridWidth::new(gs, bs);

    // ω = sin(x)·sin(y)  =>  ψ = sin(x)·sin(y)/2
    //     u = ∂ψ/∂y = sin(x)·cos(y)/2, v = −∂ψ/∂x = −cos(x)·sin(y)/2
    let vorticity = field_from_fn(gs, bs, |x, y| x.sin() * y.sin());
    let psi = solver.solve_poisson(vorticity.view());
    let (u, v) = solver.velocity(psi.view());

    for ((i, j, _), value) in u.indexed_iter() {
        let x = i as Float * gw.x;
        let y = j as Float * gw.y;
        assert!(
            equal_floats_eps(*value, x.sin() * y.cos() / 2., EPS),
            "u[{}, {}] = {}",
            i,
            j,
            value
        );
    }

    for ((i, j, _), value) in v.indexed_iter() {
        let x = i as Float * gw.x;
        let y = j as Float * gw.y;
        assert!(
            equal_floats_eps(*value, -x.cos() * y.sin() / 2., EPS),
            "v[{}, {}] = {}",
            i,
            j,
            value
        );
    }
}
