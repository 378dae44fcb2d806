//! Sparse random projections of n-gram count vectors.
//!
//! A [`ProjectionBank`] holds `T` independent Achlioptas-style sparse sign
//! matrices of shape `(vocab_size, d)`. Projecting a count matrix through
//! all `T` of them and concatenating the results yields a fixed-width
//! `(n_words, T*d)` feature matrix that approximately preserves cosine
//! similarity between words (Johnson-Lindenstrauss).
//!
//! # References
//!
//! - Achlioptas (2003): Database-friendly random projections:
//!   Johnson-Lindenstrauss with binary coins. JCSS 66(4).
//! - Li, Hastie & Church (2006): Very sparse random projections. KDD.

use crate::error::{ProyectarError, Result};
use crate::primitives::CsrMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Generates one sparse random projection matrix of shape
/// `(n_features, n_components)`.
///
/// Each entry is 0 with probability `1 - 1/s`, otherwise `+sqrt(s/d)` or
/// `-sqrt(s/d)` with equal probability, where `d` is `n_components` and `s`
/// is the sparsity parameter. The matrix depends only on the seed and the
/// shape, never on data.
#[must_use]
pub fn sparse_random_matrix(
    n_features: usize,
    n_components: usize,
    sparsity: f64,
    seed: u64,
) -> CsrMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let scale = (sparsity / n_components as f64).sqrt() as f32;
    let threshold = 1.0 / sparsity;

    let mut rows = Vec::with_capacity(n_features);
    for _ in 0..n_features {
        let mut row = Vec::new();
        for col in 0..n_components {
            let u: f64 = rng.gen_range(0.0..1.0);
            if u < threshold {
                // Equal chance of either sign among the non-zero entries.
                let value = if u < threshold / 2.0 { scale } else { -scale };
                row.push((col, value));
            }
        }
        rows.push(row);
    }

    CsrMatrix::from_rows(rows, n_components).unwrap_or_else(|_| {
        // Column indices come from 0..n_components, so this cannot fail.
        CsrMatrix::zeros(n_features, n_components)
    })
}

/// A bank of `T` independent sparse random projections.
///
/// Projection matrices are data-independent apart from the fitted input
/// width, so `fit` takes only `n_features` (the vocabulary size). Matrix
/// `t` is seeded with `random_state + t`, which makes the bank fully
/// reproducible from its configuration; persisting the seed is enough to
/// regenerate the matrices.
///
/// Fitted state is immutable and safe to share across concurrent
/// `transform` calls. `fit` itself is not thread-safe against concurrent
/// transforms; callers must complete fitting before transforming.
///
/// # Examples
///
/// ```
/// use proyectar::primitives::CsrMatrix;
/// use proyectar::projection::ProjectionBank;
///
/// let mut bank = ProjectionBank::new()
///     .with_n_projections(4)
///     .with_n_components(8)
///     .with_random_state(7);
/// bank.fit(100).expect("fit should succeed");
///
/// let counts = CsrMatrix::from_rows(vec![vec![(3, 1.0), (42, 2.0)]], 100).expect("valid");
/// let projected = bank.transform(&[counts]).expect("transform should succeed");
/// assert_eq!(projected[0].shape(), (1, 32));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionBank {
    /// Number of independent projections (T).
    n_projections: usize,
    /// Output dimension per projection (d).
    n_components: usize,
    /// Sparsity parameter (s); 1.0 means dense sign matrices.
    sparsity: f64,
    /// Base seed; projection t uses `random_state + t`.
    random_state: u64,
    /// Fitted input width (vocabulary size).
    n_features: Option<usize>,
    /// Materialized projection matrices, regenerable from the seed.
    #[serde(skip)]
    projections: Vec<CsrMatrix>,
}

impl ProjectionBank {
    /// Create a bank with default configuration: `T` 80, `d` 14,
    /// sparsity 1.0, seed 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            n_projections: 80,
            n_components: 14,
            sparsity: 1.0,
            random_state: 0,
            n_features: None,
            projections: Vec::new(),
        }
    }

    /// Set the number of independent projections (T).
    #[must_use]
    pub fn with_n_projections(mut self, n_projections: usize) -> Self {
        self.n_projections = n_projections;
        self
    }

    /// Set the output dimension per projection (d).
    #[must_use]
    pub fn with_n_components(mut self, n_components: usize) -> Self {
        self.n_components = n_components;
        self
    }

    /// Set the sparsity parameter (s >= 1); entries are non-zero with
    /// probability 1/s.
    #[must_use]
    pub fn with_sparsity(mut self, sparsity: f64) -> Self {
        self.sparsity = sparsity;
        self
    }

    /// Set the base random seed for reproducibility.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.n_projections == 0 {
            return Err(ProyectarError::InvalidHyperparameter {
                param: "n_projections".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        if self.n_components == 0 {
            return Err(ProyectarError::InvalidHyperparameter {
                param: "n_components".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        if self.sparsity < 1.0 {
            return Err(ProyectarError::InvalidHyperparameter {
                param: "sparsity".to_string(),
                value: self.sparsity.to_string(),
                constraint: ">= 1.0".to_string(),
            });
        }
        Ok(())
    }

    /// Materialize the `T` projection matrices for inputs of width
    /// `n_features`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` for an invalid configuration.
    pub fn fit(&mut self, n_features: usize) -> Result<()> {
        self.validate()?;
        let (n_components, sparsity) = (self.n_components, self.sparsity);
        self.projections = self
            .seeds()
            .collect::<Vec<u64>>()
            .into_iter()
            .map(|seed| sparse_random_matrix(n_features, n_components, sparsity, seed))
            .collect();
        self.n_features = Some(n_features);
        Ok(())
    }

    /// Project a ragged batch of count matrices (one per sentence).
    ///
    /// Each `(n_words, vocab_size)` input becomes a `(n_words, T*d)` sparse
    /// matrix: the horizontal concatenation of the `T` individual
    /// projections. Sentence order is preserved; sentences are projected in
    /// parallel since they share no mutable state.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before `fit`, and `DimensionMismatch` when an
    /// input's column count differs from the fitted `n_features`.
    pub fn transform(&self, batch: &[CsrMatrix]) -> Result<Vec<CsrMatrix>> {
        let n_features = self.n_features.ok_or(ProyectarError::NotFitted {
            operation: "transform".to_string(),
        })?;

        batch
            .par_iter()
            .map(|counts| {
                if counts.n_cols() != n_features {
                    return Err(ProyectarError::DimensionMismatch {
                        expected: format!("{n_features} columns"),
                        actual: format!("{} columns", counts.n_cols()),
                    });
                }
                let parts: Vec<CsrMatrix> = self
                    .projections
                    .iter()
                    .map(|p| counts.matmul(p))
                    .collect::<std::result::Result<_, _>>()
                    .map_err(|e| ProyectarError::Other(e.to_string()))?;
                CsrMatrix::hstack(&parts).map_err(|e| ProyectarError::Other(e.to_string()))
            })
            .collect()
    }

    /// Regenerate the projection matrices after deserialization.
    ///
    /// Serialized banks persist only configuration and seed; this rebuilds
    /// the matrices for the stored `n_features`. No-op on an unfitted bank.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` for an invalid configuration.
    pub fn rematerialize(&mut self) -> Result<()> {
        if let Some(n_features) = self.n_features {
            self.fit(n_features)?;
        }
        Ok(())
    }

    /// Total output dimensionality, `T*d`.
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.n_projections * self.n_components
    }

    /// Per-projection seeds, `random_state + t` for t in 0..T.
    pub fn seeds(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.n_projections as u64).map(move |t| self.random_state.wrapping_add(t))
    }

    /// Fitted input width, if fitted.
    #[must_use]
    pub fn n_features(&self) -> Option<usize> {
        self.n_features
    }

    /// Whether `fit` has been called.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.n_features.is_some()
    }
}

impl Default for ProjectionBank {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
#[path = "tests_projection_contract.rs"]
mod tests_contract;
