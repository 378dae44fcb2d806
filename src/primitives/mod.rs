//! Core compute primitives for sparse linear algebra.
//!
//! Every intermediate in the projection pipeline (n-gram counts, projection
//! matrices, projected features) is sparse, so the crate is built on a single
//! CSR matrix type.

mod sparse;

pub use sparse::CsrMatrix;
