//! This module handles a TOML settings file.

use crate::{BoxSize, Float, GridSize};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::prelude::*;

const DEFAULT_OUTPUT_FORMAT: OutputFormat = OutputFormat::CBOR;

error_chain! {
    foreign_links {
        TOMLError(toml::de::Error);
    }
}

/// Structure that holds settings, which are defined externally in a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub simulation: SimulationSettings,
    pub sampling: SamplingSettings,
    pub environment: EnvironmentSettings,
}

/// Holds parameters of the spectral solvers and the vorticity evolution.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSettings {
    pub box_size: BoxSize,
    pub grid_size: GridSize,
    pub viscosity: Float,
    pub timestep: Float,
    pub number_of_timesteps: usize,
    pub number_of_snapshots: usize,
}

/// Holds parameters of the dataset samplers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingSettings {
    pub number_of_fields: usize,
    #[serde(default = "default_tau")]
    pub tau: Float,
    #[serde(default = "default_smoothness")]
    pub smoothness: Float,
    pub collocation_points: usize,
    /// Rows are dimensions, columns are `[min, max]` bounds.
    pub domain: Vec<[Float; 2]>,
    pub seed: u64,
}

/// Default inverse length scale of the initial vorticity spectrum.
fn default_tau() -> Float {
    Float::sqrt(2.)
}

/// Default smoothness exponent of the initial vorticity spectrum.
fn default_smoothness() -> Float {
    5.
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    CBOR,
    Bincode,
}

/// Holds environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentSettings {
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
    pub prefix: String,
    #[serde(skip_deserializing)]
    version: String,
}

/// Default output format
fn default_output_format() -> OutputFormat {
    DEFAULT_OUTPUT_FORMAT
}

/// Reads the content of a file `filename` into an string and return it.
fn read_from_file(filename: &str) -> Result<String> {
    let mut f = File::open(filename).chain_err(|| "Unable to open file.")?;
    let mut content = String::new();

    f.read_to_string(&mut content)
        .chain_err(|| "Unable to read file.")?;

    Ok(content)
}

/// Reads content of a file `param_file`, that should point to a valid TOML
/// file, and parses it.
/// Then returns the deserialized data in form of a Settings struct.
pub fn read_parameter_file(param_file: &str) -> Result<Settings> {
    // read .toml file into string
    let toml_string =
        read_from_file(param_file).chain_err(|| "Unable to read parameter file.")?;

    let mut settings: Settings =
        toml::from_str(&toml_string).chain_err(|| "Unable to parse parameter file.")?;

    settings.environment.version = "".to_string();

    check_settings(&settings)?;

    Ok(settings)
}

fn check_settings(s: &Settings) -> Result<()> {
    let bs = s.simulation.box_size;
    let gs = s.simulation.grid_size;

    if bs.x <= 0. || bs.y <= 0. {
        bail!("Box size is invalid. Must be bigger than 0: {:?}", bs)
    }

    if gs.x == 0 || gs.y == 0 {
        bail!(
            "Grid size is invalid. Must have at least one cell per axis: {:?}",
            gs
        )
    }

    if s.simulation.timestep <= 0. {
        bail!("Timestep is invalid. Must be bigger than 0.")
    }

    if s.simulation.viscosity < 0. {
        bail!("Viscosity is invalid. Must not be negative.")
    }

    if s.simulation.number_of_snapshots > s.simulation.number_of_timesteps {
        bail!(
            "Cannot take more snapshots than timesteps. `number_of_snapshots` must be \
             smaller or equal to `number_of_timesteps`"
        )
    }

    if s.sampling.domain.is_empty() {
        bail!("Sampling domain must have at least one dimension.")
    }

    for d in &s.sampling.domain {
        if d[0] >= d[1] {
            bail!("Sampling domain bounds are invalid. Must be [min, max]: {:?}", d)
        }
    }

    Ok(())
}

impl Settings {
    pub fn set_version(&mut self, version: &str) {
        // save version to metadata
        self.environment.version = version.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_settings() {
        let mut settings = read_parameter_file("./test/parameter.toml").unwrap();
        settings.set_version("version");
        let settings_default = read_parameter_file("./test/parameter_no_defaults.toml").unwrap();

        assert_eq!(settings.environment.output_format, OutputFormat::Bincode);
        assert_eq!(
            settings_default.environment.output_format,
            DEFAULT_OUTPUT_FORMAT
        );
        assert_eq!(settings.environment.prefix, "trainingset");
        assert_eq!(settings.environment.version, "version");
        assert_eq!(settings_default.environment.version, "");

        assert_eq!(
            settings.simulation.box_size,
            BoxSize {
                x: 6.283185307179586,
                y: 6.283185307179586,
            }
        );
        assert_eq!(settings.simulation.grid_size, GridSize { x: 64, y: 64 });
        assert_eq!(settings.simulation.viscosity, 0.01);
        assert_eq!(settings.simulation.timestep, 0.0005);
        assert_eq!(settings.simulation.number_of_timesteps, 4000);
        assert_eq!(settings.simulation.number_of_snapshots, 5);

        assert_eq!(settings.sampling.number_of_fields, 16);
        assert_eq!(settings.sampling.tau, 1.5);
        assert_eq!(settings_default.sampling.tau, Float::sqrt(2.));
        assert_eq!(settings.sampling.smoothness, 4.0);
        assert_eq!(settings_default.sampling.smoothness, 5.0);
        assert_eq!(settings.sampling.collocation_points, 2048);
        assert_eq!(
            settings.sampling.domain,
            vec![
                [0.0, 6.283185307179586],
                [0.0, 6.283185307179586],
            ]
        );
        assert_eq!(settings.sampling.seed, 42);
    }

    #[test]
    #[should_panic]
    fn test_settings_unused_keys() {
        read_parameter_file("./test/parameter_unused.toml").unwrap();
    }

    #[test]
    fn test_settings_validation() {
        assert!(read_parameter_file("./test/parameter_invalid.toml").is_err());
    }
}
