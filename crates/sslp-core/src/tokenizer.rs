//! Quote-aware splitting of raw command text into tokens.
//!
//! Whitespace outside quotes separates tokens. A quote span starts when a
//! token begins with a configured open marker and runs up to the matching
//! close marker, or to the end of input if the quote is never closed. The
//! markers themselves are not part of the token.

use crate::config::QuotePair;

/// A single token borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text with quote markers removed.
    pub value: &'a str,
    /// Whether the token came from inside a quote pair.
    ///
    /// Quoted tokens are always positional, even if they look like options.
    pub quoted: bool,
}

impl<'a> Token<'a> {
    /// A token produced outside any quote span.
    pub fn bare(value: &'a str) -> Self {
        Self {
            value,
            quoted: false,
        }
    }

    /// A token produced from inside a quote span.
    pub fn quoted(value: &'a str) -> Self {
        Self {
            value,
            quoted: true,
        }
    }
}

/// Lazy, single-pass iterator over the tokens of an input string.
///
/// Created by [`tokenize`]. Tokenizing never fails.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a, 'q> {
    input: &'a str,
    quotes: &'q [QuotePair],
    pos: usize,
}

impl<'a, 'q> Tokenizer<'a, 'q> {
    /// Creates a tokenizer over `input` using the given quote pairs.
    ///
    /// When several pairs share an open marker, the first declared one wins.
    pub fn new(input: &'a str, quotes: &'q [QuotePair]) -> Self {
        Self {
            input,
            quotes,
            pos: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn read_quoted(&mut self, pair: &QuotePair) -> Token<'a> {
        let input = self.input;
        let start = self.pos + pair.open.len();
        let body = &input[start..];
        match body.find(pair.close.as_str()) {
            Some(end) => {
                self.pos = start + end + pair.close.len();
                Token::quoted(&body[..end])
            }
            // Unterminated: the rest of the input is the token.
            None => {
                self.pos = input.len();
                Token::quoted(body)
            }
        }
    }

    fn read_bare(&mut self) -> Token<'a> {
        let input = self.input;
        let rest = &input[self.pos..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += end;
        Token::bare(&rest[..end])
    }
}

impl<'a> Iterator for Tokenizer<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return None;
        }

        let rest = &self.input[self.pos..];
        let quotes = self.quotes;
        match quotes.iter().find(|pair| rest.starts_with(pair.open.as_str())) {
            Some(pair) => Some(self.read_quoted(pair)),
            None => Some(self.read_bare()),
        }
    }
}

impl std::iter::FusedIterator for Tokenizer<'_, '_> {}

/// Splits `input` into tokens, honouring the given quote pairs.
pub fn tokenize<'a, 'q>(input: &'a str, quotes: &'q [QuotePair]) -> Tokenizer<'a, 'q> {
    Tokenizer::new(input, quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfig;

    fn values(input: &str, quotes: &[QuotePair]) -> Vec<String> {
        tokenize(input, quotes).map(|t| t.value.to_string()).collect()
    }

    fn default_quotes() -> Vec<QuotePair> {
        ParseConfig::default().quote_pairs().to_vec()
    }

    #[test]
    fn test_tokenize_simple() {
        let quotes = default_quotes();
        assert_eq!(values("echo hello world", &quotes), ["echo", "hello", "world"]);
    }

    #[test]
    fn test_tokenize_matches_whitespace_split_without_quotes() {
        let quotes = default_quotes();
        let input = "  a\tbb   --c=d \n /e\u{3000}f ";
        let expected: Vec<_> = input.split_whitespace().collect();
        assert_eq!(values(input, &quotes), expected);
    }

    #[test]
    fn test_tokenize_quoted() {
        let quotes = [QuotePair::new("\"", "\"").unwrap()];
        let tokens: Vec<_> = tokenize(r#"a "b c" d"#, &quotes).collect();
        assert_eq!(
            tokens,
            [Token::bare("a"), Token::quoted("b c"), Token::bare("d")]
        );
        assert!(!tokens[1].value.contains('"'));
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        let quotes = [QuotePair::new("\"", "\"").unwrap()];
        let tokens: Vec<_> = tokenize(r#"a "b c"#, &quotes).collect();
        assert_eq!(tokens, [Token::bare("a"), Token::quoted("b c")]);
    }

    #[test]
    fn test_tokenize_unicode_quotes() {
        let quotes = default_quotes();
        assert_eq!(
            values("say “hello there” 「こんにちは 世界」 end", &quotes),
            ["say", "hello there", "こんにちは 世界", "end"]
        );
    }

    #[test]
    fn test_tokenize_multi_char_quotes() {
        let quotes = [QuotePair::new("<<", ">>").unwrap()];
        let tokens: Vec<_> = tokenize("x <<--a=b c>> y", &quotes).collect();
        assert_eq!(tokens[1], Token::quoted("--a=b c"));
        assert_eq!(tokens[2], Token::bare("y"));
    }

    #[test]
    fn test_tokenize_first_declared_quote_wins() {
        let quotes = [
            QuotePair::new("'", "!").unwrap(),
            QuotePair::new("'", "'").unwrap(),
        ];
        assert_eq!(values("'a b' c!", &quotes), ["a b' c"]);
    }

    #[test]
    fn test_tokenize_quote_inside_word_is_literal() {
        let quotes = default_quotes();
        assert_eq!(values(r#"--name="a b""#, &quotes), [r#"--name="a"#, r#"b""#]);
    }

    #[test]
    fn test_tokenize_empty_quotes() {
        let quotes = default_quotes();
        let tokens: Vec<_> = tokenize(r#"a "" b"#, &quotes).collect();
        assert_eq!(tokens[1], Token::quoted(""));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_tokenize_empty() {
        let quotes = default_quotes();
        assert!(values("", &quotes).is_empty());
        assert!(values("   \t  ", &quotes).is_empty());
    }
}
