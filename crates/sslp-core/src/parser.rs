//! End-to-end parsing: tokenize, classify, extract.

use tracing::debug;

use crate::classify::{ClassifiedResult, classify};
use crate::config::{ParseConfig, ParserOptions};
use crate::error::ConfigResult;
use crate::extract::{Extraction, extract};
use crate::schema::{CommandSchema, OptionSchema};
use crate::tokenizer::tokenize;

/// Tokenizes and classifies `content` under `config`.
pub fn parse(content: &str, config: &ParseConfig) -> ClassifiedResult {
    classify(
        tokenize(content, config.quote_pairs()),
        config.prefixes(),
        config.separators(),
    )
}

/// A reusable parser bound to one configuration.
///
/// The configuration is fixed at construction. A command that carries its own
/// configuration is parsed with it for that call only (see
/// [`run_command`](Self::run_command)), so a single parser can be shared
/// across threads and commands.
///
/// # Example
///
/// ```rust,ignore
/// let parser = ArgsParser::new();
/// let result = parser.run("option1 --age=10 --flag", &["name".into(), "age".into()]);
/// assert_eq!(result.text("name"), Some("option1"));
/// assert!(result.is_flag("flag"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgsParser {
    config: ParseConfig,
}

impl ArgsParser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with an already built configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Builds the configuration from `options` and creates a parser with it.
    pub fn from_options(options: &ParserOptions) -> ConfigResult<Self> {
        options.build().map(Self::with_config)
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Classifies `content` without applying a schema.
    pub fn parse_content(&self, content: &str) -> ClassifiedResult {
        parse(content, &self.config)
    }

    /// Applies `schema` to an already classified result.
    pub fn extract_options(
        &self,
        parsed: &ClassifiedResult,
        schema: &[OptionSchema],
    ) -> Extraction {
        extract(parsed, schema)
    }

    /// Parses `content` and extracts the options declared in `schema`.
    pub fn run(&self, content: &str, schema: &[OptionSchema]) -> Extraction {
        self.extract_options(&self.parse_content(content), schema)
    }

    /// Parses `content` for `command`.
    ///
    /// Uses the command's own configuration when it has one, otherwise the
    /// parser's. The parser itself is never reconfigured.
    pub fn run_command(&self, content: &str, command: &CommandSchema) -> Extraction {
        let config = match command.config_override() {
            Some(config) => {
                debug!(command = command.name(), "Using command parser configuration");
                config
            }
            None => &self.config,
        };
        extract(&parse(content, config), command.declared_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::OptionValue;

    fn schema(names: &[&str]) -> Vec<OptionSchema> {
        names.iter().map(|n| OptionSchema::new(*n)).collect()
    }

    #[test]
    fn test_run_parser() {
        let parser = ArgsParser::new();
        let result = parser.run("option1 --age=10 --flag", &schema(&["name", "age", "flag1"]));
        assert_eq!(
            result,
            Extraction::from([
                ("name", OptionValue::text("option1")),
                ("age", OptionValue::text("10")),
                ("flag", OptionValue::Flag),
            ])
        );
    }

    #[test]
    fn test_run_with_quotes() {
        let parser = ArgsParser::new();
        let result = parser.run(
            r#"do-thing --name=world "quoted value" --verbose"#,
            &schema(&["action", "message"]),
        );
        assert_eq!(result.text("action"), Some("do-thing"));
        assert_eq!(result.text("message"), Some("quoted value"));
        assert!(result.is_flag("verbose"));
        assert!(!result.contains_key("name"));
    }

    #[test]
    fn test_command_config_applies_to_that_call_only() {
        let parser = ArgsParser::new();
        let dash = ParserOptions::new().prefixes(["-"]).build().unwrap();
        let command = CommandSchema::new("cmd").option("name").parser_config(dash);
        let plain = CommandSchema::new("cmd").option("name");

        let result = parser.run_command("-name=a", &command);
        assert_eq!(result.text("name"), Some("a"));

        let result = parser.run_command("-name=a", &plain);
        assert_eq!(result.text("name"), Some("-name=a"));
        assert_eq!(parser.config(), &ParseConfig::default());
    }

    #[test]
    fn test_rebuilt_configs_parse_identically() {
        let options = ParserOptions::new()
            .prefixes(["--", "!"])
            .quote_pattern("(«|‹)", "»")
            .build_patterns(true);
        let first = ArgsParser::from_options(&options).unwrap();
        let second = ArgsParser::from_options(&options).unwrap();
        assert_eq!(first.config(), second.config());

        let content = "a «b c» !flag --k=v ‹d»";
        assert_eq!(first.parse_content(content), second.parse_content(content));
        let names = schema(&["x", "y", "k"]);
        assert_eq!(first.run(content, &names), second.run(content, &names));
    }

    #[test]
    fn test_invalid_options_fail_before_parsing() {
        let options = ParserOptions::new().quote_pattern("«|‹", "»").build_patterns(true);
        assert!(ArgsParser::from_options(&options).is_err());
    }

    #[test]
    fn test_shared_parser_across_threads() {
        let parser = std::sync::Arc::new(ArgsParser::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let parser = parser.clone();
                std::thread::spawn(move || {
                    let dash = ParserOptions::new().prefixes(["-"]).build().unwrap();
                    let command = CommandSchema::new("cmd").option("n").parser_config(dash);
                    let content = format!("-n={i}");
                    (
                        parser.run_command(&content, &command),
                        parser.run(&content, &[OptionSchema::new("n")]),
                    )
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let (with_override, default) = handle.join().unwrap();
            assert_eq!(with_override.text("n"), Some(i.to_string().as_str()));
            assert_eq!(default.text("n"), Some(format!("-n={i}").as_str()));
        }
    }
}
