//! Parser configuration: prefixes, separators and quote pairs.
//!
//! [`ParserOptions`] is the serde-friendly, partially specified form that
//! callers and configuration files provide. [`ParserOptions::build`] applies
//! defaults, expands quote patterns and validates everything once, producing an
//! immutable [`ParseConfig`] that parsing borrows.
//!
//! # Quote patterns
//!
//! A quote entry's open side is either a literal marker or a pattern of the
//! form `(a|b|c)`. With `build_patterns` enabled, a pattern expands into one
//! literal [`QuotePair`] per alternative, all sharing the entry's close marker:
//!
//! ```rust,ignore
//! let config = ParserOptions::new()
//!     .quote_pattern("(«|‹)", "»")
//!     .build_patterns(true)
//!     .build()?;
//! // => [("«", "»"), ("‹", "»")]
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult, MarkerKind};

/// Prefixes used when none are configured.
pub const DEFAULT_PREFIXES: [&str; 2] = ["--", "/"];

/// Separators used when none are configured.
pub const DEFAULT_SEPARATORS: [&str; 2] = ["=", ":"];

/// Quote pairs used when none are configured.
pub const DEFAULT_QUOTES: [(&str, &str); 3] = [("\"", "\""), ("“", "”"), ("「", "」")];

/// A literal open/close quote marker pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuotePair {
    pub open: String,
    pub close: String,
}

impl QuotePair {
    /// Creates a quote pair, rejecting empty markers.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> ConfigResult<Self> {
        let open = open.into();
        let close = close.into();
        if open.is_empty() || close.is_empty() {
            return Err(ConfigError::invalid_quote(
                format!("{open}…{close}"),
                "quote markers must not be empty",
            ));
        }
        Ok(Self { open, close })
    }
}

/// Open side of a configured quote entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteOpen {
    /// A literal marker, used as-is.
    Literal(String),
    /// An alternation such as `(«|‹)`, expanded when `build_patterns` is set.
    Pattern { pattern: String },
}

/// A configured quote entry: open side and literal close marker.
///
/// Deserializes from a two-element array, e.g. `["\"", "\""]` or
/// `[{ pattern = "(«|‹)" }, "»"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEntry(pub QuoteOpen, pub String);

impl QuoteEntry {
    fn expand(&self, build_patterns: bool) -> ConfigResult<Vec<QuotePair>> {
        let QuoteEntry(open, close) = self;
        match open {
            QuoteOpen::Literal(open) => {
                Ok(vec![QuotePair::new(open.as_str(), close.as_str())?])
            }
            QuoteOpen::Pattern { pattern } if build_patterns => expand_pattern(pattern)?
                .into_iter()
                .map(|open| QuotePair::new(open, close.as_str()))
                .collect(),
            QuoteOpen::Pattern { pattern } => Err(ConfigError::invalid_quote(
                pattern.as_str(),
                "pattern entries require `build_patterns` to be enabled",
            )),
        }
    }
}

/// Splits `(a|b|c)` into its literal alternatives.
fn expand_pattern(pattern: &str) -> ConfigResult<Vec<String>> {
    let inner = pattern
        .strip_prefix('(')
        .and_then(|p| p.strip_suffix(')'))
        .ok_or_else(|| {
            ConfigError::invalid_quote(
                pattern,
                "expected a parenthesised alternation like `(a|b)`",
            )
        })?;

    inner
        .split('|')
        .map(|alt| {
            if alt.is_empty() {
                Err(ConfigError::invalid_quote(pattern, "empty alternative"))
            } else if alt.contains(['(', ')']) {
                Err(ConfigError::invalid_quote(pattern, "nested groups are not supported"))
            } else {
                Ok(alt.to_string())
            }
        })
        .collect()
}

/// Partially specified parser options.
///
/// Every unset field falls back to its default when [`build`](Self::build) is
/// called. This is the shape loaded from configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Option and flag prefixes (default: `--`, `/`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<String>>,

    /// Key/value separators (default: `=`, `:`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separators: Option<Vec<String>>,

    /// Quote entries (default: `"…"`, `“…”`, `「…」`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotes: Option<Vec<QuoteEntry>>,

    /// Expand pattern quote entries into literal pairs.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub build_patterns: bool,
}

impl ParserOptions {
    /// Creates empty options; building them yields the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the prefix list.
    pub fn prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the separator list.
    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = Some(separators.into_iter().map(Into::into).collect());
        self
    }

    /// Appends a literal quote pair. The first call discards the default quotes.
    pub fn quote(self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.push_quote(QuoteEntry(QuoteOpen::Literal(open.into()), close.into()))
    }

    /// Appends a pattern quote entry. The first call discards the default quotes.
    pub fn quote_pattern(self, pattern: impl Into<String>, close: impl Into<String>) -> Self {
        self.push_quote(QuoteEntry(
            QuoteOpen::Pattern {
                pattern: pattern.into(),
            },
            close.into(),
        ))
    }

    /// Enables or disables pattern expansion (default: `false`).
    pub fn build_patterns(mut self, enabled: bool) -> Self {
        self.build_patterns = enabled;
        self
    }

    fn push_quote(mut self, entry: QuoteEntry) -> Self {
        self.quotes.get_or_insert_with(Vec::new).push(entry);
        self
    }

    /// Applies defaults, expands patterns and validates markers.
    ///
    /// Fails fast with [`ConfigError`] before any parsing takes place; a failed
    /// build leaves previously built configurations untouched.
    pub fn build(&self) -> ConfigResult<ParseConfig> {
        let prefixes = resolve_markers(
            self.prefixes.as_deref(),
            &DEFAULT_PREFIXES,
            MarkerKind::Prefix,
        )?;
        let separators = resolve_markers(
            self.separators.as_deref(),
            &DEFAULT_SEPARATORS,
            MarkerKind::Separator,
        )?;

        let quote_pairs = match &self.quotes {
            Some(entries) => {
                let mut pairs = Vec::with_capacity(entries.len());
                for entry in entries {
                    pairs.extend(entry.expand(self.build_patterns)?);
                }
                pairs
            }
            None => default_quote_pairs(),
        };

        for (index, pair) in quote_pairs.iter().enumerate() {
            if quote_pairs[..index].iter().any(|p| p.open == pair.open) {
                warn!(
                    open = %pair.open,
                    close = %pair.close,
                    "Duplicate quote open marker, the first declared pair wins"
                );
            }
        }

        debug!(
            prefixes = prefixes.len(),
            separators = separators.len(),
            quote_pairs = quote_pairs.len(),
            "Parser configuration built"
        );

        Ok(ParseConfig {
            prefixes,
            separators,
            quote_pairs,
        })
    }
}

fn resolve_markers(
    configured: Option<&[String]>,
    defaults: &[&str],
    kind: MarkerKind,
) -> ConfigResult<Vec<String>> {
    match configured {
        Some(markers) if markers.iter().any(String::is_empty) => {
            Err(ConfigError::EmptyMarker { kind })
        }
        Some(markers) => Ok(markers.to_vec()),
        None => Ok(defaults.iter().map(|m| (*m).to_string()).collect()),
    }
}

fn default_quote_pairs() -> Vec<QuotePair> {
    DEFAULT_QUOTES
        .iter()
        .map(|(open, close)| QuotePair {
            open: (*open).to_string(),
            close: (*close).to_string(),
        })
        .collect()
}

/// A fully resolved, immutable parser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    prefixes: Vec<String>,
    separators: Vec<String>,
    quote_pairs: Vec<QuotePair>,
}

impl ParseConfig {
    /// Option/flag prefixes in declaration order.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Key/value separators in declaration order.
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Literal quote pairs in declaration order.
    pub fn quote_pairs(&self) -> &[QuotePair] {
        &self.quote_pairs
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES.iter().map(|p| (*p).to_string()).collect(),
            separators: DEFAULT_SEPARATORS.iter().map(|s| (*s).to_string()).collect(),
            quote_pairs: default_quote_pairs(),
        }
    }
}

impl TryFrom<ParserOptions> for ParseConfig {
    type Error = ConfigError;

    fn try_from(options: ParserOptions) -> ConfigResult<Self> {
        options.build()
    }
}

impl TryFrom<&ParserOptions> for ParseConfig {
    type Error = ConfigError;

    fn try_from(options: &ParserOptions) -> ConfigResult<Self> {
        options.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserOptions::new().build().unwrap();
        assert_eq!(config, ParseConfig::default());
        assert_eq!(config.prefixes(), ["--", "/"]);
        assert_eq!(config.separators(), ["=", ":"]);
        assert_eq!(config.quote_pairs().len(), 3);
        assert_eq!(config.quote_pairs()[2].open, "「");
    }

    #[test]
    fn test_custom_quotes_replace_defaults() {
        let config = ParserOptions::new().quote("'", "'").build().unwrap();
        assert_eq!(config.quote_pairs(), [QuotePair::new("'", "'").unwrap()]);
    }

    #[test]
    fn test_pattern_expansion() {
        let config = ParserOptions::new()
            .quote_pattern("(«|‹)", "»")
            .quote("\"", "\"")
            .build_patterns(true)
            .build()
            .unwrap();
        let opens: Vec<_> = config.quote_pairs().iter().map(|p| p.open.as_str()).collect();
        assert_eq!(opens, ["«", "‹", "\""]);
        assert_eq!(config.quote_pairs()[1].close, "»");
    }

    #[test]
    fn test_pattern_without_build_patterns_is_rejected() {
        let err = ParserOptions::new()
            .quote_pattern("(«|‹)", "»")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidQuotePattern { .. }));
    }

    #[test]
    fn test_malformed_patterns_are_rejected() {
        for pattern in ["«|‹", "(«|)", "((«)|‹)", "()"] {
            let result = ParserOptions::new()
                .quote_pattern(pattern, "»")
                .build_patterns(true)
                .build();
            assert!(
                matches!(result, Err(ConfigError::InvalidQuotePattern { .. })),
                "{pattern} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_markers_are_rejected() {
        let err = ParserOptions::new().quote("", "\"").build().unwrap_err();
        assert!(err.to_string().starts_with("invalid quote pattern"));

        let err = ParserOptions::new().prefixes(["--", ""]).build().unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyMarker {
                kind: MarkerKind::Prefix
            }
        );
    }

    #[test]
    fn test_deserialize_quote_entries() {
        let options: ParserOptions = serde_json::from_str(
            r#"{"quotes": [["'", "'"], [{"pattern": "(«|‹)"}, "»"]], "build_patterns": true}"#,
        )
        .unwrap();
        let config = options.build().unwrap();
        assert_eq!(config.quote_pairs().len(), 3);
        assert_eq!(config.prefixes(), ["--", "/"]);
    }
}
