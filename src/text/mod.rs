//! Text segmentation for the projection pipeline.
//!
//! This module provides the deterministic front half of the pipeline:
//! - [`SentenceSplitter`]: raw text into bounded-length sentences
//! - [`BoundaryTokenizer`]: sentences into boundary-marked word tokens
//! - [`similarity`]: cosine similarity over sparse feature rows
//!
//! All tokenizers implement the [`Tokenizer`] trait and follow zero-unwrap
//! safety.

pub mod sentence;
pub mod similarity;
pub mod tokenize;

pub use sentence::SentenceSplitter;
pub use tokenize::BoundaryTokenizer;

use crate::error::Result;

/// Trait for tokenizers that split text into string tokens.
pub trait Tokenizer {
    /// Tokenizes the input text.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
