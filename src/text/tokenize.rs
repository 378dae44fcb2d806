//! Boundary-marked word tokenization.

use crate::error::Result;
use crate::text::Tokenizer;
use serde::{Deserialize, Serialize};

/// Marker prepended to every token, so n-grams that touch the start of a
/// word are distinguishable from interior n-grams.
pub const BEGIN_MARKER: char = '<';

/// Marker appended to every token.
pub const END_MARKER: char = '>';

/// Word tokenizer that wraps each token with begin/end boundary markers.
///
/// Splitting rules:
/// - `/` and `-` get a surrounding space, so they become their own tokens
/// - tokens are split on Unicode whitespace, repeated whitespace collapses
/// - empty tokens are dropped
/// - each surviving token is wrapped as `<token>`
///
/// # Examples
///
/// ```
/// use proyectar::text::{Tokenizer, tokenize::BoundaryTokenizer};
///
/// let tokenizer = BoundaryTokenizer::new();
///
/// let tokens = tokenizer.tokenize("star wars").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["<star>", "<wars>"]);
///
/// // Slashes and hyphens form their own tokens
/// let tokens = tokenizer.tokenize("on/off-grid").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["<on>", "</>", "<off>", "<->", "<grid>"]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoundaryTokenizer;

impl BoundaryTokenizer {
    /// Create a new boundary tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Wraps a single word with the boundary markers.
    #[must_use]
    pub fn mark(word: &str) -> String {
        let mut token = String::with_capacity(word.len() + 2);
        token.push(BEGIN_MARKER);
        token.push_str(word);
        token.push(END_MARKER);
        token
    }
}

impl Tokenizer for BoundaryTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut spaced = String::with_capacity(text.len() + 8);
        for ch in text.chars() {
            if ch == '/' || ch == '-' {
                spaced.push(' ');
                spaced.push(ch);
                spaced.push(' ');
            } else {
                spaced.push(ch);
            }
        }

        Ok(spaced.split_whitespace().map(Self::mark).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = BoundaryTokenizer::new();
        let tokens = tokenizer.tokenize("the cat sat").expect("tokenize");
        assert_eq!(tokens, vec!["<the>", "<cat>", "<sat>"]);
    }

    #[test]
    fn test_collapses_whitespace() {
        let tokenizer = BoundaryTokenizer::new();
        let tokens = tokenizer.tokenize("foo   bar\t baz").expect("tokenize");
        assert_eq!(tokens, vec!["<foo>", "<bar>", "<baz>"]);
    }

    #[test]
    fn test_slash_and_hyphen_boundaries() {
        let tokenizer = BoundaryTokenizer::new();
        let tokens = tokenizer.tokenize("read/write non-zero").expect("tokenize");
        assert_eq!(
            tokens,
            vec!["<read>", "</>", "<write>", "<non>", "<->", "<zero>"]
        );
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = BoundaryTokenizer::new();
        assert!(tokenizer.tokenize("").expect("tokenize").is_empty());
        assert!(tokenizer.tokenize("   ").expect("tokenize").is_empty());
    }

    #[test]
    fn test_mark() {
        assert_eq!(BoundaryTokenizer::mark("word"), "<word>");
    }
}
