//! Configuration loading errors.

use thiserror::Error;

/// Error loading a YAML configuration file.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed to read config file: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
