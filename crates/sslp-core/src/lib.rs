//! # SSLP Core
//!
//! Turns the free-form argument text of a chat command into named options,
//! flags and positional values.
//!
//! ```text
//! raw text ──▶ Tokenizer ──▶ classify ──▶ ClassifiedResult ──▶ extract (+ schema) ──▶ Extraction
//! ```
//!
//! - [`tokenize`]: quote-aware splitting; quote pairs may be multi-character
//!   or non-ASCII (`“…”`, `「…」`)
//! - [`classify`]: `--key=value` options, `--flag` flags, everything else
//!   positional
//! - [`extract`]: maps declared option names to values, falling back to the
//!   positional token at the option's declared index
//!
//! Configuration is built once from [`ParserOptions`] and is immutable
//! afterwards. Parsing never fails; only building a configuration can.

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod parser;
pub mod schema;
pub mod tokenizer;

pub use classify::{ClassifiedResult, classify};
pub use config::{
    DEFAULT_PREFIXES, DEFAULT_QUOTES, DEFAULT_SEPARATORS, ParseConfig, ParserOptions, QuoteEntry,
    QuoteOpen, QuotePair,
};
pub use error::{ConfigError, ConfigResult, MarkerKind};
pub use extract::{Extraction, OptionValue, extract};
pub use parser::{ArgsParser, parse};
pub use schema::{CommandSchema, OptionSchema};
pub use tokenizer::{Token, Tokenizer, tokenize};
