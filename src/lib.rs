//! Spectral solvers and samplers for generating training data for
//! machine-learning experiments on the 2D incompressible Navier-Stokes
//! equations. The crate solves the Poisson equation for the streamfunction
//! of a periodic vorticity field with FFT based methods, derives velocity
//! fields by spectral differentiation, evolves vorticity with a
//! pseudo-spectral time stepper and draws initial conditions and
//! collocation points from seeded samplers.

#[macro_use]
extern crate error_chain;

pub mod consts;
pub mod flowfield;
pub mod generator;
pub mod mesh;
pub mod output;
pub mod sampler;
pub mod settings;
pub mod utils;

#[cfg(test)]
pub mod test_helper;

pub mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain! {
        foreign_links {
            Io(::std::io::Error);
            Toml(::toml::de::Error);
            Bincode(::bincode::Error);
            Cbor(::serde_cbor::error::Error);
        }
    }
}

use serde::{Deserialize, Serialize};

#[cfg(feature = "single")]
pub type Float = f32;
#[cfg(not(feature = "single"))]
pub type Float = f64;

/// Size of the periodic simulation box in arbitrary physical dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BoxSize {
    pub x: Float,
    pub y: Float,
}

/// Size of the discrete grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GridSize {
    pub x: usize,
    pub y: usize,
}
