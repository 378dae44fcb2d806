//! Character n-gram vectorization.
//!
//! Converts boundary-marked word tokens into sparse count vectors over a
//! fitted character n-gram vocabulary.

mod char_ngram;

pub use char_ngram::CharNGramVectorizer;

#[cfg(test)]
mod tests;
