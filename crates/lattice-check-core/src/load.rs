//! Reading configuration and output files from disk.

use std::path::Path;

use lattice_check_ir::parse::{parse_configuration, parse_output, ParseError};
use lattice_check_ir::types::{Configuration, Output};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read `{path}`: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Load one configuration file. The path's display form becomes its source.
pub fn load_configuration(path: impl AsRef<Path>) -> Result<Configuration, LoadError> {
    let (source, text) = read(path.as_ref())?;
    Ok(parse_configuration(&source, &text)?)
}

/// Load one output file. The path's display form becomes its source.
pub fn load_output(path: impl AsRef<Path>) -> Result<Output, LoadError> {
    let (source, text) = read(path.as_ref())?;
    Ok(parse_output(&source, &text)?)
}

/// Load configuration files in process order, stopping at the first failure.
pub fn load_configurations<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Configuration>, LoadError> {
    paths.iter().map(load_configuration).collect()
}

/// Load output files in process order, stopping at the first failure.
pub fn load_outputs<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Output>, LoadError> {
    paths.iter().map(load_output).collect()
}

fn read(path: &Path) -> Result<(String, String), LoadError> {
    let source = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(text) => {
            tracing::trace!(file = %source, bytes = text.len(), "loaded");
            Ok((source, text))
        }
        Err(err) => Err(LoadError::Io { path: source, source: err }),
    }
}
