//! Declared command options.
//!
//! A [`CommandSchema`] is what a command framework hands to the parser: the
//! ordered option names (their order drives positional fallback) and, if the
//! command needs it, its own [`ParseConfig`].

use serde::{Deserialize, Serialize};

use crate::config::ParseConfig;

/// A single declared option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionSchema {
    pub name: String,
}

impl OptionSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for OptionSchema {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for OptionSchema {
    fn from(name: String) -> Self {
        Self { name }
    }
}

/// A command's declared options plus an optional parser configuration.
///
/// # Example
///
/// ```rust,ignore
/// let command = CommandSchema::new("greet")
///     .option("name")
///     .option("times")
///     .parser_config(ParserOptions::new().prefixes(["-"]).build()?);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSchema {
    name: String,
    options: Vec<OptionSchema>,
    parser_config: Option<ParseConfig>,
}

impl CommandSchema {
    /// Creates a command with no options and no configuration override.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declares the next option. Declaration order is the positional order.
    pub fn option(mut self, option: impl Into<OptionSchema>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Declares several options in order.
    pub fn options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OptionSchema>,
    {
        self.options.extend(options.into_iter().map(Into::into));
        self
    }

    /// Attaches a configuration used instead of the parser's for this command.
    pub fn parser_config(mut self, config: ParseConfig) -> Self {
        self.parser_config = Some(config);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_options(&self) -> &[OptionSchema] {
        &self.options
    }

    pub fn config_override(&self) -> Option<&ParseConfig> {
        self.parser_config.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_schema_builder() {
        let command = CommandSchema::new("greet")
            .option("name")
            .options(["age", "flag1"]);
        assert_eq!(command.name(), "greet");
        let names: Vec<_> = command
            .declared_options()
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, ["name", "age", "flag1"]);
        assert!(command.config_override().is_none());
    }

    #[test]
    fn test_command_schema_config_override() {
        let command = CommandSchema::new("x").parser_config(ParseConfig::default());
        assert_eq!(command.config_override(), Some(&ParseConfig::default()));
    }
}
