//! Similarity metrics over sparse feature rows.
//!
//! The projection pipeline approximately preserves cosine similarity
//! between word count vectors; this module provides the measure used to
//! check that, and the one downstream consumers typically apply to the
//! projected features.

use crate::error::{ProyectarError, Result};
use crate::primitives::CsrMatrix;

/// Compute cosine similarity between row `i` of `a` and row `j` of `b`.
///
/// Returns a value between -1 and 1; rows with zero norm are treated as
/// orthogonal to everything (similarity 0).
///
/// # Errors
///
/// Returns `DimensionMismatch` if the two matrices have different column
/// counts.
///
/// # Examples
///
/// ```
/// use proyectar::primitives::CsrMatrix;
/// use proyectar::text::similarity::cosine_similarity;
///
/// let m = CsrMatrix::from_dense(2, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0]).expect("valid");
/// let sim = cosine_similarity(&m, 0, &m, 1).expect("same width");
/// assert!((sim - 1.0).abs() < 1e-6); // parallel rows
/// ```
pub fn cosine_similarity(a: &CsrMatrix, i: usize, b: &CsrMatrix, j: usize) -> Result<f32> {
    if a.n_cols() != b.n_cols() {
        return Err(ProyectarError::DimensionMismatch {
            expected: format!("{} columns", a.n_cols()),
            actual: format!("{} columns", b.n_cols()),
        });
    }

    let norm_a = a.row_norm(i);
    let norm_b = b.row_norm(j);
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(a.row_dot(i, b, j) / (norm_a * norm_b))
}
