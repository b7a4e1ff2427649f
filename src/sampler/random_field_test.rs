use super::*;

use crate::consts::TWOPI;
use crate::test_helper::equal_floats_eps;
use ndarray::s;

fn test_sampler(batch_size: usize, seed: u64) -> GaussianRandomField {
    let gs = GridSize { x: 32, y: 32 };
    let bs = BoxSize { x: TWOPI, y: TWOPI };

    GaussianRandomField::new(gs, bs, Float::sqrt(2.), 5., batch_size, seed)
}

#[test]
fn fields_have_zero_mean() {
    let mut sampler = test_sampler(4, 11);
    let fields = sampler.generate();

    assert_eq!(fields.dim(), (32, 32, 4));

    for sample in fields.axis_iter(Axis(2)) {
        let mean = sample.mean().unwrap();
        assert!(equal_floats_eps(mean, 0., 1e-10), "mean = {}", mean);
    }
}

#[test]
fn samples_within_a_batch_differ() {
    let mut sampler = test_sampler(2, 23);
    let fields = sampler.generate();

    assert_ne!(
        fields.slice(s![.., .., 0]),
        fields.slice(s![.., .., 1])
    );
}

#[test]
fn generation_is_reproducible() {
    let mut a = test_sampler(2, 5);
    let mut b = test_sampler(2, 5);

    assert_eq!(a.batch(0), b.batch(0));

    // drifted seeds still replay as the same trajectory
    assert_eq!(a.batch(2), b.batch(2));
    assert_ne!(a.batch(0), b.batch(1));
}
