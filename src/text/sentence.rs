//! Sentence splitting with length bounds.

use serde::{Deserialize, Serialize};

/// Control character inserted after each sentence terminator, so the split
/// never re-matches inside already-terminated text.
const SEPARATOR: char = '\u{001f}';

/// Characters that terminate a sentence.
const TERMINATORS: [char; 4] = ['.', '?', '!', ';'];

/// Splits raw text into trimmed sentences of bounded length.
///
/// Sentences end at `.`, `?`, `!`, `;` or a newline. Candidates longer than
/// `max_len` characters are greedily cut into consecutive leading-trimmed
/// chunks of exactly `max_len` characters until the remainder fits;
/// candidates (or final remainders) shorter than `min_len` are discarded.
///
/// # Examples
///
/// ```
/// use proyectar::text::SentenceSplitter;
///
/// let splitter = SentenceSplitter::new();
/// let sentences = splitter.split("The cat sat on the mat. Hi! Where is the dog hiding?");
/// // "Hi!" is below the default minimum length of 10 and is dropped.
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0], "The cat sat on the mat.");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceSplitter {
    max_len: usize,
    min_len: usize,
}

impl SentenceSplitter {
    /// Creates a splitter with default bounds (10 to 200 characters).
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_len: 200,
            min_len: 10,
        }
    }

    /// Set the maximum sentence length in characters.
    #[must_use]
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len.max(1);
        self
    }

    /// Set the minimum sentence length in characters.
    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Splits `text` into sentences. Always succeeds; unusable input
    /// degrades to an empty vector.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut marked = String::with_capacity(text.len() + 16);
        for ch in text.chars() {
            if ch == '\n' {
                marked.push(SEPARATOR);
            } else {
                marked.push(ch);
                if TERMINATORS.contains(&ch) {
                    marked.push(SEPARATOR);
                }
            }
        }

        let mut sentences = Vec::new();
        for candidate in marked.split(SEPARATOR) {
            self.push_bounded(candidate, &mut sentences);
        }
        sentences
    }

    /// Trims a candidate and applies the length bounds, chunking overlong
    /// sentences into `max_len`-character pieces.
    fn push_bounded(&self, candidate: &str, out: &mut Vec<String>) {
        let mut rest = candidate.trim();
        while rest.chars().count() > self.max_len {
            rest = rest.trim_start();
            let cut = match rest.char_indices().nth(self.max_len) {
                Some((byte, _)) => byte,
                None => break,
            };
            out.push(rest[..cut].to_string());
            rest = &rest[cut..];
        }
        let rest = rest.trim();
        if rest.chars().count() >= self.min_len {
            out.push(rest.to_string());
        }
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}
