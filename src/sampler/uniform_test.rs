use super::*;

use ndarray::{arr2, Axis};
use quickcheck::quickcheck;

fn test_domain() -> Array<Float, Ix2> {
    arr2(&[[0., 1.], [-1., 1.]])
}

#[test]
fn samples_respect_bounds_and_means() {
    let mut sampler = UniformSampler::new(test_domain(), 1000, 7);
    let batch = sampler.generate();

    assert_eq!(batch.dim(), (1000, 2));

    for point in batch.outer_iter() {
        assert!(0. <= point[0] && point[0] < 1., "x = {}", point[0]);
        assert!(-1. <= point[1] && point[1] < 1., "y = {}", point[1]);
    }

    let means = batch.mean_axis(Axis(0)).unwrap();
    assert!((means[0] - 0.5).abs() < 0.05, "mean x = {}", means[0]);
    assert!(means[1].abs() < 0.1, "mean y = {}", means[1]);
}

#[test]
fn index_zero_reproduces_batches() {
    let mut a = UniformSampler::new(test_domain(), 64, 42);
    let mut b = UniformSampler::new(test_domain(), 64, 42);

    assert_eq!(a.batch(0), b.batch(0));
    // index 0 leaves the seed untouched, a replay yields the same batch
    assert_eq!(a.batch(0), b.batch(0));
}

#[test]
fn seed_drift_is_reproducible_as_a_trajectory() {
    let mut a = UniformSampler::new(test_domain(), 16, 3);
    let trajectory: Vec<_> = (1..4).map(|i| a.batch(i)).collect();

    // drifted seeds decorrelate consecutive batches
    assert_ne!(trajectory[0], trajectory[1]);
    assert_ne!(trajectory[1], trajectory[2]);

    // the same index drawn again sees a drifted seed
    let mut c = UniformSampler::new(test_domain(), 16, 3);
    let first = c.batch(1);
    assert_ne!(first, c.batch(1));

    // a full replay from the initial seed reproduces the whole trajectory
    let mut b = UniformSampler::new(test_domain(), 16, 3);
    for (i, batch) in (1..4).zip(trajectory.iter()) {
        assert_eq!(&b.batch(i), batch);
    }
}

quickcheck! {
    fn samples_in_bounds_qc(seed: u64) -> bool {
        let mut sampler = UniformSampler::new(test_domain(), 64, seed);

        sampler
            .generate()
            .outer_iter()
            .all(|p| 0. <= p[0] && p[0] < 1. && -1. <= p[1] && p[1] < 1.)
    }
}
