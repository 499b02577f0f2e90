//! Configuration loading error types.

use std::path::PathBuf;

use sslp_core::ConfigError;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum LoadError {
    /// File not found at the specified path.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file extension is not a supported (or enabled) format.
    #[error("Unsupported or disabled configuration file format: .{0}")]
    UnsupportedFormat(String),

    /// Figment failed to merge or deserialize the sources.
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    /// The loaded parser options are invalid.
    #[error("Invalid parser configuration: {0}")]
    Parser(#[from] ConfigError),
}

impl From<figment::Error> for LoadError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}

/// Result type for configuration loading.
pub type LoadResult<T> = Result<T, LoadError>;
