//! # SSLP
//!
//! Shell-like argument parsing for chat bot commands.
//!
//! Users type natural command arguments such as
//! `do-thing --name=world "quoted value" --verbose`; a command declares the
//! option names it expects and receives a plain mapping back:
//!
//! ```rust,ignore
//! use sslp::prelude::*;
//!
//! let parser = ArgsParser::new();
//! let command = CommandSchema::new("greet").options(["name", "age"]);
//!
//! let options = parser.run_command("option1 --age=10 --flag", &command);
//! assert_eq!(options.text("name"), Some("option1"));
//! assert_eq!(options.text("age"), Some("10"));
//! assert!(options.is_flag("flag"));
//! ```
//!
//! ## Features
//!
//! - `toml-config` *(default)*: TOML configuration files
//! - `yaml-config`: YAML configuration files
//! - `json-log`: JSON log output

pub use sslp_core as core;
pub use sslp_runtime as runtime;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sslp_core::{
        ArgsParser, ClassifiedResult, CommandSchema, ConfigError, Extraction, OptionSchema,
        OptionValue, ParseConfig, ParserOptions, QuotePair,
    };
    pub use sslp_runtime::{ConfigLoader, LoggingBuilder, SslpConfig};
}
