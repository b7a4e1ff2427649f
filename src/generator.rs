//! Wires the samplers and solvers into a dataset generation pipeline.

use crate::flowfield::spectral_solver::SpectralSolver;
use crate::flowfield::vorticity_solver::VorticitySolver;
use crate::flowfield::ScalarFieldBatch;
use crate::sampler::random_field::GaussianRandomField;
use crate::sampler::uniform::UniformSampler;
use crate::sampler::Sampler;
use crate::settings::Settings;
use crate::Float;
use log::info;
use ndarray::{s, Array, Ix2};
use serde::{Deserialize, Serialize};

/// Bundle of generated training arrays.
#[derive(Debug, Serialize, Deserialize)]
pub struct Dataset {
    /// Initial vorticity fields, `(nx, ny, n_fields)`.
    pub vorticity: ScalarFieldBatch,
    /// Streamfunction solving `∇²ψ = −ω`, same shape.
    pub streamfunction: ScalarFieldBatch,
    /// Velocity component `u = ∂ψ/∂y`, same shape.
    pub velocity_u: ScalarFieldBatch,
    /// Velocity component `v = −∂ψ/∂x`, same shape.
    pub velocity_v: ScalarFieldBatch,
    /// Time evolution snapshots of the first vorticity field.
    pub snapshots: Vec<ScalarFieldBatch>,
    /// Collocation points drawn from the sampling domain, `(n_points, dim)`.
    pub collocation_points: Array<Float, Ix2>,
}

pub struct DatasetGenerator {
    spectral_solver: SpectralSolver,
    vorticity_solver: VorticitySolver,
    field_sampler: GaussianRandomField,
    point_sampler: UniformSampler,
    settings: Settings,
}

impl DatasetGenerator {
    pub fn new(settings: Settings) -> DatasetGenerator {
        // helper bindings for brevity
        let sim = settings.simulation;
        let sampling = settings.sampling.clone();

        let forcing = |x: Float, y: Float| (x + y).sin() + (x + y).cos();

        let domain = Array::from_shape_fn((sampling.domain.len(), 2), |(i, j)| {
            sampling.domain[i][j]
        });

        DatasetGenerator {
            spectral_solver: SpectralSolver::new(sim.grid_size, sim.box_size),
            vorticity_solver: VorticitySolver::new(
                sim.grid_size,
                sim.box_size,
                sim.viscosity,
                sim.timestep,
                forcing,
            ),
            field_sampler: GaussianRandomField::new(
                sim.grid_size,
                sim.box_size,
                sampling.tau,
                sampling.smoothness,
                sampling.number_of_fields,
                sampling.seed,
            ),
            point_sampler: UniformSampler::new(domain, sampling.collocation_points, sampling.seed),
            settings,
        }
    }

    /// Generates the dataset at `index`, drifting the sampler seeds.
    pub fn generate(&mut self, index: usize) -> Dataset {
        let sim = self.settings.simulation;

        info!(
            "Drawing {} initial vorticity fields",
            self.settings.sampling.number_of_fields
        );
        let vorticity = self.field_sampler.batch(index);

        info!("Solving for streamfunction and velocity");
        let streamfunction = self.spectral_solver.solve_poisson(vorticity.view());
        let (velocity_u, velocity_v) = self.spectral_solver.velocity(streamfunction.view());

        info!(
            "Evolving the first vorticity field for {} timesteps",
            sim.number_of_timesteps
        );
        let snapshots = self.vorticity_solver.run(
            vorticity.slice(s![.., .., ..1]),
            sim.number_of_timesteps,
            sim.number_of_snapshots,
        );

        info!(
            "Sampling {} collocation points",
            self.settings.sampling.collocation_points
        );
        let collocation_points = self.point_sampler.batch(index);

        Dataset {
            vorticity,
            streamfunction,
            velocity_u,
            velocity_v,
            snapshots,
            collocation_points,
        }
    }
}
