//! Compressed sparse row (CSR) matrix type.

use serde::{Deserialize, Serialize};

/// A sparse matrix of f32 values in compressed sparse row layout.
///
/// Row `r` owns the entries `indices[indptr[r]..indptr[r+1]]` /
/// `data[indptr[r]..indptr[r+1]]`, with column indices sorted ascending
/// within each row.
///
/// # Examples
///
/// ```
/// use proyectar::primitives::CsrMatrix;
///
/// let m = CsrMatrix::from_rows(vec![vec![(0, 1.0), (3, 2.0)], vec![(1, 4.0)]], 4)
///     .expect("column indices within bounds");
/// assert_eq!(m.shape(), (2, 4));
/// assert_eq!(m.nnz(), 3);
/// assert_eq!(m.get(0, 3), 2.0);
/// assert_eq!(m.get(1, 0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrMatrix {
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f32>,
    cols: usize,
}

impl CsrMatrix {
    /// Creates an empty matrix with the given shape (all zeros).
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            indptr: vec![0; rows + 1],
            indices: Vec::new(),
            data: Vec::new(),
            cols,
        }
    }

    /// Creates a matrix from per-row `(column, value)` entries.
    ///
    /// Entries may be unsorted; duplicates within a row are summed and
    /// explicit zeros are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if any column index is out of bounds.
    pub fn from_rows(
        rows: Vec<Vec<(usize, f32)>>,
        cols: usize,
    ) -> std::result::Result<Self, &'static str> {
        let mut indptr = Vec::with_capacity(rows.len() + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();
        indptr.push(0);

        for mut row in rows {
            if row.iter().any(|&(c, _)| c >= cols) {
                return Err("Column index out of bounds");
            }
            row.sort_unstable_by_key(|&(c, _)| c);
            for (c, v) in row {
                if v == 0.0 {
                    continue;
                }
                if indices.last() == Some(&c) && indices.len() > *indptr.last().unwrap_or(&0) {
                    let last = data.len() - 1;
                    data[last] += v;
                } else {
                    indices.push(c);
                    data.push(v);
                }
            }
            indptr.push(indices.len());
        }

        Ok(Self {
            indptr,
            indices,
            data,
            cols,
        })
    }

    /// Creates a matrix from dense row-major data, dropping zeros.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_dense(
        rows: usize,
        cols: usize,
        dense: &[f32],
    ) -> std::result::Result<Self, &'static str> {
        if dense.len() != rows * cols {
            return Err("Data length must equal rows * cols");
        }
        let row_entries = (0..rows)
            .map(|r| {
                (0..cols)
                    .filter_map(|c| {
                        let v = dense[r * cols + c];
                        (v != 0.0).then_some((c, v))
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(row_entries, cols)
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.indptr.len() - 1, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.indptr.len() - 1
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of stored (non-zero) entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Gets element at (row, col), zero when no entry is stored.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        let (cols, vals) = self.row(row);
        match cols.binary_search(&col) {
            Ok(pos) => vals[pos],
            Err(_) => 0.0,
        }
    }

    /// Returns the column indices and values of a row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> (&[usize], &[f32]) {
        let (start, end) = (self.indptr[row], self.indptr[row + 1]);
        (&self.indices[start..end], &self.data[start..end])
    }

    /// Copies out the row range `[start, end)` as a new matrix.
    ///
    /// This is the ragged-batch split: a flat matrix built over concatenated
    /// sentences is divided back into per-sentence matrices by cumulative
    /// row offsets.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end` exceeds the row count.
    #[must_use]
    pub fn slice_rows(&self, start: usize, end: usize) -> Self {
        assert!(start <= end && end <= self.n_rows());
        let (lo, hi) = (self.indptr[start], self.indptr[end]);
        Self {
            indptr: self.indptr[start..=end].iter().map(|&p| p - lo).collect(),
            indices: self.indices[lo..hi].to_vec(),
            data: self.data[lo..hi].to_vec(),
            cols: self.cols,
        }
    }

    /// Matrix product `self * rhs`, both sparse.
    ///
    /// Accumulates each output row in a dense scratch buffer of `rhs.n_cols()`
    /// entries, then compresses. Accumulation order is fixed (row-major over
    /// `self`, then over `rhs` rows), so results are bit-reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.n_cols() != rhs.n_rows()`.
    pub fn matmul(&self, rhs: &Self) -> std::result::Result<Self, &'static str> {
        if self.cols != rhs.n_rows() {
            return Err("Inner dimensions must agree");
        }
        let out_cols = rhs.n_cols();
        let mut scratch = vec![0.0f32; out_cols];

        let mut indptr = Vec::with_capacity(self.n_rows() + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();
        indptr.push(0);

        for r in 0..self.n_rows() {
            let (cols, vals) = self.row(r);
            for (&k, &v) in cols.iter().zip(vals) {
                let (rcols, rvals) = rhs.row(k);
                for (&c, &w) in rcols.iter().zip(rvals) {
                    scratch[c] += v * w;
                }
            }
            for (c, slot) in scratch.iter_mut().enumerate() {
                if *slot != 0.0 {
                    indices.push(c);
                    data.push(*slot);
                    *slot = 0.0;
                }
            }
            indptr.push(indices.len());
        }

        Ok(Self {
            indptr,
            indices,
            data,
            cols: out_cols,
        })
    }

    /// Horizontally concatenates matrices with equal row counts.
    ///
    /// # Errors
    ///
    /// Returns an error if `parts` is empty or row counts differ.
    pub fn hstack(parts: &[Self]) -> std::result::Result<Self, &'static str> {
        let first = parts.first().ok_or("hstack requires at least one matrix")?;
        let rows = first.n_rows();
        if parts.iter().any(|p| p.n_rows() != rows) {
            return Err("All matrices must have the same row count");
        }

        let cols = parts.iter().map(CsrMatrix::n_cols).sum();
        let nnz = parts.iter().map(CsrMatrix::nnz).sum();
        let mut indptr = Vec::with_capacity(rows + 1);
        let mut indices = Vec::with_capacity(nnz);
        let mut data = Vec::with_capacity(nnz);
        indptr.push(0);

        for r in 0..rows {
            let mut offset = 0;
            for part in parts {
                let (pcols, pvals) = part.row(r);
                indices.extend(pcols.iter().map(|&c| c + offset));
                data.extend_from_slice(pvals);
                offset += part.n_cols();
            }
            indptr.push(indices.len());
        }

        Ok(Self {
            indptr,
            indices,
            data,
            cols,
        })
    }

    /// Dot product of row `i` of `self` with row `j` of `other`.
    ///
    /// # Panics
    ///
    /// Panics if either row index is out of bounds.
    #[must_use]
    pub fn row_dot(&self, i: usize, other: &Self, j: usize) -> f32 {
        let (acols, avals) = self.row(i);
        let (bcols, bvals) = other.row(j);
        let mut dot = 0.0;
        let (mut a, mut b) = (0, 0);
        while a < acols.len() && b < bcols.len() {
            match acols[a].cmp(&bcols[b]) {
                std::cmp::Ordering::Less => a += 1,
                std::cmp::Ordering::Greater => b += 1,
                std::cmp::Ordering::Equal => {
                    dot += avals[a] * bvals[b];
                    a += 1;
                    b += 1;
                }
            }
        }
        dot
    }

    /// Euclidean norm of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row_norm(&self, i: usize) -> f32 {
        let (_, vals) = self.row(i);
        vals.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Exports the matrix as a dense row-major vector.
    #[must_use]
    pub fn to_dense(&self) -> Vec<f32> {
        let (rows, cols) = self.shape();
        let mut dense = vec![0.0; rows * cols];
        for r in 0..rows {
            let (rcols, rvals) = self.row(r);
            for (&c, &v) in rcols.iter().zip(rvals) {
                dense[r * cols + c] = v;
            }
        }
        dense
    }
}

#[cfg(test)]
#[path = "sparse_tests.rs"]
mod tests;
