//! Error types for parser configuration.
//!
//! Parsing itself never fails: unterminated quotes, empty input and missing
//! options are all represented as data. The only failure surface is building a
//! [`ParseConfig`](crate::ParseConfig) from [`ParserOptions`](crate::ParserOptions).

use std::fmt;

use thiserror::Error;

/// Which kind of marker a configuration entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Option/flag prefix such as `--`.
    Prefix,
    /// Key/value separator such as `=`.
    Separator,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix => f.write_str("prefix"),
            Self::Separator => f.write_str("separator"),
        }
    }
}

/// Errors raised while building a parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A quote entry is not a valid literal pair or alternation pattern.
    #[error("invalid quote pattern '{pattern}': {reason}")]
    InvalidQuotePattern {
        /// The offending entry as written in the configuration.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A prefix or separator marker is the empty string.
    #[error("{kind} markers must not be empty")]
    EmptyMarker {
        /// Which list the empty marker was found in.
        kind: MarkerKind,
    },
}

impl ConfigError {
    /// Creates an invalid quote pattern error.
    pub fn invalid_quote(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuotePattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
