//! Statistics helpers for inspecting chains and sample batches.

use crate::Float;
use ndarray::{s, Array, ArrayView, Ix1};

/// Splits `series` into consecutive chunks of length `every` and returns the
/// mean of the chunk means, their standard deviation and the chunk means
/// themselves. Trailing values that do not fill a chunk are dropped.
pub fn batch_means(
    series: ArrayView<Float, Ix1>,
    every: usize,
) -> (Float, Float, Array<Float, Ix1>) {
    let n_chunks = series.len() / every;

    let means: Array<Float, Ix1> = (0..n_chunks)
        .map(|c| series.slice(s![c * every..(c + 1) * every]).mean().unwrap())
        .collect();

    (means.mean().unwrap(), means.std(0.), means)
}

/// Calculates a density normalized histogram of `samples` with `bins`
/// equally wide bins between the smallest and largest sample. Returns bin
/// centers and densities.
pub fn histogram(
    samples: ArrayView<Float, Ix1>,
    bins: usize,
) -> (Array<Float, Ix1>, Array<Float, Ix1>) {
    let min = samples.fold(Float::INFINITY, |m, &v| m.min(v));
    let max = samples.fold(Float::NEG_INFINITY, |m, &v| m.max(v));
    let width = (max - min) / bins as Float;

    let mut counts: Array<Float, Ix1> = Array::zeros(bins);

    for &v in samples {
        let mut i = ((v - min) / width) as usize;
        // the maximum falls into the last bin
        if i == bins {
            i -= 1;
        }
        counts[i] += 1.;
    }

    let n = samples.len() as Float;
    let densities = counts.map(|c| c / (n * width));
    let centers = Array::from_shape_fn(bins, |i| min + (i as Float + 0.5) * width);

    (centers, densities)
}
