//! SSLP Runtime - configuration and logging for the SSLP argument parser.
//!
//! This crate provides:
//! - Layered configuration loading (`ConfigLoader`) producing [`SslpConfig`]
//! - Logging configuration (`LoggingBuilder`)
//!
//! ```ignore
//! use sslp_runtime::{ConfigLoader, logging};
//!
//! let (config, parser) = ConfigLoader::new().load_parser()?;
//! logging::init_from_config(&config.logging);
//!
//! let options = parser.run("alice --age=3", &["name".into(), "age".into()]);
//! ```

pub mod config;
pub mod logging;

// Re-exports
pub use config::{ConfigLoader, LoadError, LoadResult, LoggingConfig, SslpConfig};
pub use logging::LoggingBuilder;

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;
