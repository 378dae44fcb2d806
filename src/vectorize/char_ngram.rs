//! Character n-gram count vectorizer with a fitted vocabulary.

use crate::error::{ProyectarError, Result};
use crate::primitives::CsrMatrix;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Vectorizer that maps word tokens to sparse character n-gram counts.
///
/// Two-phase contract: `fit` builds a vocabulary from a flat token corpus,
/// `transform` turns ragged batches of tokens into per-sentence sparse count
/// matrices over that vocabulary. Out-of-vocabulary n-grams contribute
/// nothing and never fail.
///
/// # Examples
///
/// ```
/// use proyectar::vectorize::CharNGramVectorizer;
///
/// let corpus: Vec<String> = ["<cat>", "<cats>", "<car>"]
///     .iter().map(|s| s.to_string()).collect();
///
/// let mut vectorizer = CharNGramVectorizer::new().with_min_df(1);
/// vectorizer.fit(&corpus).expect("fit should succeed");
///
/// let batch = vec![vec!["<cat>".to_string(), "<dog>".to_string()]];
/// let matrices = vectorizer.transform(&batch).expect("transform should succeed");
/// assert_eq!(matrices.len(), 1);
/// assert_eq!(matrices[0].n_rows(), 2);
/// assert_eq!(matrices[0].n_cols(), vectorizer.vocabulary_size());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharNGramVectorizer {
    /// Inclusive range of n-gram character lengths.
    ngram_range: (usize, usize),
    /// Minimum document frequency (absolute count of tokens).
    min_df: usize,
    /// Maximum document frequency (fraction of tokens).
    max_df: f32,
    /// Vocabulary size cap.
    max_features: usize,
    /// N-gram to column index, built by `fit`.
    vocabulary: Option<HashMap<String, usize>>,
}

impl CharNGramVectorizer {
    /// Create a vectorizer with default configuration:
    /// n-grams of length 1 to 4, `min_df` 2, `max_df` 0.99,
    /// `max_features` 10,000,000.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ngram_range: (1, 4),
            min_df: 2,
            max_df: 0.99,
            max_features: 10_000_000,
            vocabulary: None,
        }
    }

    /// Set the character n-gram length range (inclusive).
    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n, max_n);
        self
    }

    /// Set the minimum document frequency threshold.
    ///
    /// N-grams occurring in fewer than `min_df` tokens are dropped.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Set the maximum relative document frequency (0.0-1.0].
    ///
    /// N-grams occurring in more than `max_df` of all tokens are dropped.
    #[must_use]
    pub fn with_max_df(mut self, max_df: f32) -> Self {
        self.max_df = max_df;
        self
    }

    /// Set the maximum vocabulary size.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    fn validate(&self) -> Result<()> {
        let (min_n, max_n) = self.ngram_range;
        if min_n < 1 || min_n > max_n {
            return Err(ProyectarError::InvalidHyperparameter {
                param: "ngram_range".to_string(),
                value: format!("({min_n}, {max_n})"),
                constraint: "1 <= min <= max".to_string(),
            });
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(ProyectarError::InvalidHyperparameter {
                param: "max_df".to_string(),
                value: self.max_df.to_string(),
                constraint: "in (0, 1]".to_string(),
            });
        }
        if self.max_features == 0 {
            return Err(ProyectarError::InvalidHyperparameter {
                param: "max_features".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        Ok(())
    }

    /// Fit the vocabulary on a flat corpus of word tokens.
    ///
    /// Document frequency of an n-gram is the number of distinct tokens
    /// containing it at least once. Retained n-grams have
    /// `min_df <= df <= ceil(max_df * n_tokens)`; the result is capped at
    /// `max_features` by descending document frequency with ascending
    /// lexicographic tie-break, and column indices follow that order.
    /// Identical corpus and configuration always produce an identical
    /// vocabulary.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` for an invalid configuration.
    pub fn fit(&mut self, tokens: &[String]) -> Result<()> {
        self.validate()?;

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            let mut seen = HashSet::new();
            for ngram in char_ngrams(token, self.ngram_range) {
                if seen.insert(ngram.clone()) {
                    *doc_freq.entry(ngram).or_insert(0) += 1;
                }
            }
        }

        let max_df_count = (self.max_df * tokens.len() as f32).ceil() as usize;
        let mut retained: Vec<(String, usize)> = doc_freq
            .into_iter()
            .filter(|&(_, df)| df >= self.min_df && df <= max_df_count)
            .collect();

        retained.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        retained.truncate(self.max_features);

        self.vocabulary = Some(
            retained
                .into_iter()
                .enumerate()
                .map(|(idx, (ngram, _))| (ngram, idx))
                .collect(),
        );
        Ok(())
    }

    /// Transform a ragged batch of tokens (one inner vector per sentence)
    /// into one sparse count matrix per sentence.
    ///
    /// Each matrix has shape `(n_words_in_sentence, vocab_size)`; entry
    /// `[i, j]` counts occurrences of n-gram `j` inside token `i`. Input
    /// order and raggedness are preserved, including zero-word sentences.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has not been called.
    pub fn transform(&self, batch: &[Vec<String>]) -> Result<Vec<CsrMatrix>> {
        let vocabulary = self.vocabulary.as_ref().ok_or(ProyectarError::NotFitted {
            operation: "transform".to_string(),
        })?;
        let vocab_size = vocabulary.len();

        // Fold the ragged batch into one flat matrix, then split it back
        // along cumulative row offsets.
        let mut rows = Vec::with_capacity(batch.iter().map(Vec::len).sum());
        for sentence in batch {
            for token in sentence {
                rows.push(self.count_row(token, vocabulary));
            }
        }
        let flat = CsrMatrix::from_rows(rows, vocab_size)
            .map_err(|e| ProyectarError::Other(e.to_string()))?;

        let mut matrices = Vec::with_capacity(batch.len());
        let mut offset = 0;
        for sentence in batch {
            matrices.push(flat.slice_rows(offset, offset + sentence.len()));
            offset += sentence.len();
        }
        Ok(matrices)
    }

    /// Sparse count row for one token; OOV n-grams are dropped.
    fn count_row(&self, token: &str, vocabulary: &HashMap<String, usize>) -> Vec<(usize, f32)> {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for ngram in char_ngrams(token, self.ngram_range) {
            if let Some(&col) = vocabulary.get(&ngram) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }
        counts.into_iter().collect()
    }

    /// The fitted vocabulary, if any.
    #[must_use]
    pub fn vocabulary(&self) -> Option<&HashMap<String, usize>> {
        self.vocabulary.as_ref()
    }

    /// Size of the fitted vocabulary (0 before fit).
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.as_ref().map_or(0, HashMap::len)
    }

    /// Whether `fit` has been called.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.vocabulary.is_some()
    }
}

impl Default for CharNGramVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// All character n-grams of `token` with lengths in the inclusive range.
fn char_ngrams(token: &str, (min_n, max_n): (usize, usize)) -> Vec<String> {
    let chars: Vec<char> = token.chars().collect();
    let mut ngrams = Vec::new();
    for n in min_n..=max_n.min(chars.len()) {
        for window in chars.windows(n) {
            ngrams.push(window.iter().collect());
        }
    }
    ngrams
}

#[cfg(test)]
mod ngram_tests {
    use super::char_ngrams;

    #[test]
    fn test_char_ngrams_full_range() {
        let grams = char_ngrams("ab", (1, 4));
        assert_eq!(grams, vec!["a", "b", "ab"]);
    }

    #[test]
    fn test_char_ngrams_counts() {
        // len 5 token: 5 unigrams + 4 bigrams + 3 trigrams + 2 quadgrams
        assert_eq!(char_ngrams("<cat>", (1, 4)).len(), 14);
    }

    #[test]
    fn test_char_ngrams_empty_token() {
        assert!(char_ngrams("", (1, 4)).is_empty());
    }
}
