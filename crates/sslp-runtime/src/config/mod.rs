//! Configuration module for the SSLP runtime.
//!
//! Loads parser options and logging settings from files, environment
//! variables and programmatic overrides.

pub mod error;
pub mod loader;
pub mod schema;

pub use error::{LoadError, LoadResult};
pub use loader::{ConfigLoader, Profile};
pub use schema::{LogFormat, LogLevel, LogOutput, LoggingConfig, SslpConfig};
