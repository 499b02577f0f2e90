//! Sorting tokens into named options, flags and positional values.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::trace;

use crate::schema::OptionSchema;
use crate::tokenizer::Token;

/// Tokens partitioned into the three option buckets.
///
/// Every input token ends up in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedResult {
    /// `prefix key separator value` tokens, keyed by `key`, values in
    /// encounter order.
    pub options: HashMap<String, Vec<String>>,
    /// `prefix key` tokens without a separator.
    pub flags: HashSet<String>,
    /// Everything else, in encounter order.
    pub ordered: Vec<String>,
}

impl ClassifiedResult {
    /// All values given for a named option, or an empty slice.
    pub fn option_values(&self, name: &str) -> &[String] {
        self.options.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The positional value at each schema entry's index, if any.
    pub fn ordered_values(&self, schema: &[OptionSchema]) -> Vec<Option<&str>> {
        (0..schema.len())
            .map(|index| self.ordered.get(index).map(String::as_str))
            .collect()
    }

    /// Whether `name` was given as a bare flag.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}

enum Classified<'t> {
    Named { key: &'t str, value: &'t str },
    Flag(&'t str),
    Positional,
}

/// Partitions `tokens` using the given prefix and separator markers.
///
/// Quoted tokens are always positional. For a prefixed token the longest
/// matching prefix is stripped; if the remainder contains a separator, the
/// earliest occurrence splits it into key and value (the first declared
/// separator wins a tie), otherwise the remainder is a flag. A prefixed token
/// with an empty key is positional.
pub fn classify<'a, I>(tokens: I, prefixes: &[String], separators: &[String]) -> ClassifiedResult
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut result = ClassifiedResult::default();

    for token in tokens {
        let kind = if token.quoted {
            Classified::Positional
        } else {
            classify_bare(token.value, prefixes, separators)
        };

        match kind {
            Classified::Named { key, value } => {
                trace!(key, value, "Classified named option");
                result
                    .options
                    .entry(key.to_string())
                    .or_default()
                    .push(value.to_string());
            }
            Classified::Flag(key) => {
                trace!(key, "Classified flag");
                result.flags.insert(key.to_string());
            }
            Classified::Positional => {
                trace!(value = token.value, quoted = token.quoted, "Classified positional");
                result.ordered.push(token.value.to_string());
            }
        }
    }

    result
}

fn classify_bare<'t>(
    value: &'t str,
    prefixes: &[String],
    separators: &[String],
) -> Classified<'t> {
    let Some(rest) = strip_longest_prefix(value, prefixes) else {
        return Classified::Positional;
    };

    let split = separators
        .iter()
        .filter_map(|sep| rest.find(sep.as_str()).map(|at| (at, sep.len())))
        .min_by_key(|(at, _)| *at);

    match split {
        Some((0, _)) => Classified::Positional,
        Some((at, len)) => Classified::Named {
            key: &rest[..at],
            value: &rest[at + len..],
        },
        None if rest.is_empty() => Classified::Positional,
        None => Classified::Flag(rest),
    }
}

fn strip_longest_prefix<'t>(value: &'t str, prefixes: &[String]) -> Option<&'t str> {
    prefixes
        .iter()
        .filter(|prefix| value.starts_with(prefix.as_str()))
        .max_by_key(|prefix| prefix.len())
        .map(|prefix| &value[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfig;

    fn run(tokens: &[Token<'_>]) -> ClassifiedResult {
        let config = ParseConfig::default();
        classify(tokens.iter().copied(), config.prefixes(), config.separators())
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_classify_buckets() {
        let result = run(&[
            Token::bare("option1"),
            Token::bare("--age=10"),
            Token::bare("--flag"),
            Token::bare("/mode:fast"),
        ]);
        assert_eq!(result.ordered, ["option1"]);
        assert_eq!(result.option_values("age"), ["10"]);
        assert_eq!(result.option_values("mode"), ["fast"]);
        assert!(result.has_flag("flag"));
        assert!(result.option_values("missing").is_empty());
    }

    #[test]
    fn test_classify_separator_before_flag() {
        let result = run(&[Token::bare("--flag2=value")]);
        assert!(result.flags.is_empty());
        assert_eq!(result.option_values("flag2"), ["value"]);
    }

    #[test]
    fn test_classify_repeated_options_keep_order() {
        let result = run(&[Token::bare("--x=1"), Token::bare("--x=2")]);
        assert_eq!(result.option_values("x"), strings(&["1", "2"]));
    }

    #[test]
    fn test_classify_quoted_tokens_are_positional() {
        let result = run(&[Token::quoted("--name=world"), Token::quoted("--verbose")]);
        assert_eq!(result.ordered, ["--name=world", "--verbose"]);
        assert!(result.options.is_empty());
        assert!(result.flags.is_empty());
    }

    #[test]
    fn test_classify_separator_only_checked_after_prefix() {
        let result = run(&[Token::bare("key=value"), Token::bare("http://host")]);
        assert_eq!(result.ordered, ["key=value", "http://host"]);
    }

    #[test]
    fn test_classify_earliest_separator_wins() {
        let result = run(&[Token::bare("--url:http=x")]);
        assert_eq!(result.option_values("url"), ["http=x"]);
    }

    #[test]
    fn test_classify_longest_prefix_wins() {
        let prefixes = strings(&["-", "--"]);
        let separators = strings(&["="]);
        let result = classify([Token::bare("--all"), Token::bare("-v")], &prefixes, &separators);
        assert!(result.has_flag("all"));
        assert!(result.has_flag("v"));
    }

    #[test]
    fn test_classify_empty_keys_are_positional() {
        let result = run(&[Token::bare("--"), Token::bare("/"), Token::bare("--=x")]);
        assert_eq!(result.ordered, ["--", "/", "--=x"]);
    }

    #[test]
    fn test_classify_empty_value() {
        let result = run(&[Token::bare("--name=")]);
        assert_eq!(result.option_values("name"), [""]);
    }

    #[test]
    fn test_ordered_values_per_schema_slot() {
        let result = run(&[Token::bare("a"), Token::bare("--k=v"), Token::bare("b")]);
        let schema = [
            OptionSchema::new("x"),
            OptionSchema::new("y"),
            OptionSchema::new("z"),
        ];
        assert_eq!(result.ordered_values(&schema), [Some("a"), Some("b"), None]);
    }
}
