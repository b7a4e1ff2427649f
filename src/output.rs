//! Writes generated datasets to disk.

use crate::errors::*;
use crate::generator::Dataset;
use crate::settings::{OutputFormat, Settings};
use log::debug;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Returns the output file name for the configured prefix and format.
fn output_filepath(prefix: &str, format: OutputFormat) -> PathBuf {
    let fileext = match format {
        OutputFormat::CBOR => "cbor",
        OutputFormat::Bincode => "bincode",
    };

    Path::new(prefix).with_extension(fileext)
}

/// Serializes the settings as metadata followed by the dataset into one
/// file in the configured format. Returns the path written to.
pub fn write_dataset(settings: &Settings, dataset: &Dataset) -> Result<PathBuf> {
    let filepath = output_filepath(
        &settings.environment.prefix,
        settings.environment.output_format,
    );

    let mut file = File::create(&filepath)
        .chain_err(|| format!("couldn't create output file '{}'.", filepath.display()))?;

    debug!("Writing dataset to '{}'.", filepath.display());

    match settings.environment.output_format {
        OutputFormat::CBOR => {
            serde_cbor::to_writer(&mut file, settings)
                .chain_err(|| "Cannot write metadata (format: CBOR).")?;
            serde_cbor::to_writer(&mut file, dataset)
                .chain_err(|| "Cannot write dataset (format: CBOR).")?;
        }
        OutputFormat::Bincode => {
            bincode::serialize_into(&mut file, settings)
                .chain_err(|| "Cannot write metadata (format: Bincode).")?;
            bincode::serialize_into(&mut file, dataset)
                .chain_err(|| "Cannot write dataset (format: Bincode).")?;
        }
    }

    Ok(filepath)
}
