// Move unit test into own file
#[cfg(test)]
#[path = "./metropolis_test.rs"]
mod metropolis_test;

use super::Sampler;
use crate::Float;
use ndarray::{s, Array, ArrayView, Ix1, Ix2};
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Post burn-in samples of one chain together with its acceptance rate.
#[derive(Debug, Clone)]
pub struct Chain {
    pub samples: Array<Float, Ix2>,
    pub acceptance_rate: Float,
}

/// Random-walk Metropolis-Hastings driver over a parameter vector, generic
/// in the log-prior and log-likelihood of the target posterior.
///
/// The chain starts at θ ~ U(−1, 1)^p, proposes Gaussian random-walk steps
/// scaled by an adaptive step size steering towards the optimal acceptance
/// rate of 0.234, and drops a burn-in prefix defaulting to 10% of the
/// requested samples.
pub struct MetropolisHastings<P, L> {
    log_prior: P,
    log_likelihood: L,
    n_parameters: usize,
    n_samples: usize,
    burn_in: usize,
    step_size: Float,
    seed: u64,
}

impl<P, L> MetropolisHastings<P, L>
where
    P: Fn(ArrayView<Float, Ix1>) -> Float,
    L: Fn(ArrayView<Float, Ix1>) -> Float,
{
    pub fn new(
        log_prior: P,
        log_likelihood: L,
        n_parameters: usize,
        n_samples: usize,
        step_size: Float,
        seed: u64,
    ) -> MetropolisHastings<P, L> {
        MetropolisHastings {
            log_prior,
            log_likelihood,
            n_parameters,
            n_samples,
            burn_in: n_samples / 10,
            step_size,
            seed,
        }
    }

    /// Overrides the default burn-in length.
    pub fn with_burn_in(mut self, burn_in: usize) -> MetropolisHastings<P, L> {
        self.burn_in = burn_in;
        self
    }

    fn run_chain(&self) -> Chain {
        let mut rng = Pcg64Mcg::seed_from_u64(self.seed);
        let uniform: Uniform<Float> = Uniform::new(0., 1.);
        let init: Uniform<Float> = Uniform::new(-1., 1.);

        let mut theta: Array<Float, Ix1> =
            Array::from_shape_simple_fn(self.n_parameters, || rng.sample(init));

        let total = self.n_samples + self.burn_in;
        let mut samples = Array::zeros((total, self.n_parameters));
        let mut accepted = 0;
        let mut dt = self.step_size;

        for i in 0..total {
            let noise: Array<Float, Ix1> =
                Array::from_shape_simple_fn(self.n_parameters, || {
                    dt * rng.sample::<Float, _>(rand_distr::StandardNormal)
                });
            let proposal = &theta + &noise;

            let log_posterior = (self.log_prior)(theta.view()) + (self.log_likelihood)(theta.view());
            let log_posterior_proposal =
                (self.log_prior)(proposal.view()) + (self.log_likelihood)(proposal.view());

            let a = Float::exp(log_posterior_proposal - log_posterior).min(1.);

            if rng.sample(uniform) < a {
                theta = proposal;
                accepted += 1;
            }

            samples.row_mut(i).assign(&theta);

            // steer the step size towards the optimal acceptance rate
            dt += dt * (a - 0.234) / (i + 1) as Float;
        }

        Chain {
            samples: samples.slice(s![self.burn_in.., ..]).to_owned(),
            acceptance_rate: accepted as Float / self.n_samples as Float,
        }
    }
}

impl<P, L> Sampler for MetropolisHastings<P, L>
where
    P: Fn(ArrayView<Float, Ix1>) -> Float,
    L: Fn(ArrayView<Float, Ix1>) -> Float,
{
    type Batch = Chain;

    fn generate(&mut self) -> Chain {
        self.run_chain()
    }

    fn seed_mut(&mut self) -> &mut u64 {
        &mut self.seed
    }
}
