//! The fit/transform orchestrator.
//!
//! [`WordProjector`] wires the sentence splitter, tokenizer, vectorizer and
//! projection bank into a two-stage pipeline: fit once on a corpus, then
//! transform arbitrarily many batches against the frozen vocabulary and
//! projection matrices. Its own job is shape bookkeeping only - the ragged
//! text -> sentences -> words structure is flattened into 2D matrix
//! operations and restored by cumulative row offsets at each boundary.

use crate::error::Result;
use crate::primitives::CsrMatrix;
use crate::projection::ProjectionBank;
use crate::text::{BoundaryTokenizer, SentenceSplitter, Tokenizer};
use crate::vectorize::CharNGramVectorizer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// End-to-end word projection pipeline.
///
/// Raw text goes through sentence splitting, boundary-marked word
/// tokenization, char n-gram counting over a fitted vocabulary, and a bank
/// of sparse random projections. Output is one `(n_words, T*d)` sparse
/// matrix per sentence - the fixed-width representation a downstream
/// network consumes as its input layer.
///
/// Fitted state (vocabulary, projection matrices) is immutable after `fit`
/// and safe to share across concurrent transform calls. `fit` is not
/// thread-safe against concurrent transforms; complete it first.
///
/// # Examples
///
/// ```
/// use proyectar::pipeline::WordProjector;
///
/// let corpus = "The stars started shining. The starting lineup was starstruck.";
/// let mut projector = WordProjector::new();
/// projector.fit(&[corpus]).expect("fit should succeed");
///
/// let matrices = projector
///     .transform(&["The stars were starting to shine."])
///     .expect("transform should succeed");
/// assert_eq!(matrices.len(), 1);
/// assert_eq!(matrices[0].n_cols(), projector.output_dim()); // 80 * 14 = 1120
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordProjector {
    splitter: SentenceSplitter,
    tokenizer: BoundaryTokenizer,
    vectorizer: CharNGramVectorizer,
    bank: ProjectionBank,
}

impl WordProjector {
    /// Create a projector with default configuration throughout
    /// (see each component for its defaults; output width is 1120).
    #[must_use]
    pub fn new() -> Self {
        Self {
            splitter: SentenceSplitter::new(),
            tokenizer: BoundaryTokenizer::new(),
            vectorizer: CharNGramVectorizer::new(),
            bank: ProjectionBank::new(),
        }
    }

    /// Replace the sentence splitter.
    #[must_use]
    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Replace the vectorizer.
    #[must_use]
    pub fn with_vectorizer(mut self, vectorizer: CharNGramVectorizer) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    /// Replace the projection bank.
    #[must_use]
    pub fn with_projection_bank(mut self, bank: ProjectionBank) -> Self {
        self.bank = bank;
        self
    }

    /// Fit the vocabulary and projection bank on a corpus of raw texts.
    ///
    /// Texts are split into sentences and tokenized; the flattened token
    /// sequence fits the vocabulary, whose size then fixes the projection
    /// matrices. Must complete before any transform.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` for invalid component configuration.
    pub fn fit(&mut self, texts: &[&str]) -> Result<()> {
        let mut tokens = Vec::new();
        for text in texts {
            for sentence in self.splitter.split(text) {
                tokens.extend(self.tokenizer.tokenize(&sentence)?);
            }
        }
        self.fit_tokens(tokens)
    }

    /// Fit directly on a word-level corpus, bypassing the sentence
    /// splitter's length bounds. Each word is boundary-marked and treated
    /// as one vocabulary document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` for invalid component configuration.
    pub fn fit_words(&mut self, words: &[&str]) -> Result<()> {
        let tokens = words.iter().map(|w| BoundaryTokenizer::mark(w)).collect();
        self.fit_tokens(tokens)
    }

    fn fit_tokens(&mut self, tokens: Vec<String>) -> Result<()> {
        self.vectorizer.fit(&tokens)?;
        self.bank.fit(self.vectorizer.vocabulary_size())
    }

    /// Transform raw texts into one `(n_words, T*d)` sparse matrix per
    /// surviving sentence, across all texts in input order.
    ///
    /// Words with no vocabulary overlap produce zero rows; empty or
    /// unusable text produces an empty vector, never an error.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has not been called.
    pub fn transform(&self, texts: &[&str]) -> Result<Vec<CsrMatrix>> {
        let mut batch = Vec::new();
        for text in texts {
            for sentence in self.splitter.split(text) {
                batch.push(self.tokenizer.tokenize(&sentence)?);
            }
        }
        self.transform_batch(&batch)
    }

    /// Transform bare words, one `(1, T*d)` matrix per word.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has not been called.
    pub fn transform_words(&self, words: &[&str]) -> Result<Vec<CsrMatrix>> {
        let batch: Vec<Vec<String>> = words
            .iter()
            .map(|w| vec![BoundaryTokenizer::mark(w)])
            .collect();
        self.transform_batch(&batch)
    }

    fn transform_batch(&self, batch: &[Vec<String>]) -> Result<Vec<CsrMatrix>> {
        let counts = self.vectorizer.transform(batch)?;
        self.bank.transform(&counts)
    }

    /// Output width of every projected matrix, `T*d`.
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.bank.output_dim()
    }

    /// Size of the fitted vocabulary (0 before fit).
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// Whether the pipeline has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.vectorizer.is_fitted() && self.bank.is_fitted()
    }

    /// Save the fitted pipeline as JSON: configuration, vocabulary and
    /// projection seeds. Projection matrices are regenerated on load, not
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or I/O failure.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a pipeline saved with [`WordProjector::save`], rebuilding the
    /// projection matrices from the persisted seeds.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O or deserialization failure.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let mut projector: Self = serde_json::from_str(&json)?;
        projector.bank.rematerialize()?;
        Ok(projector)
    }
}

impl Default for WordProjector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
