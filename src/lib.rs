//! Proyectar: embedding-free word projections in pure Rust.
//!
//! Proyectar turns raw text into fixed-width sparse numeric vectors
//! suitable as input to a downstream neural network, with no trainable
//! embedding table: words become character n-gram count vectors over a
//! fitted vocabulary, then pass through a bank of independent sparse
//! random projections that approximately preserve cosine similarity
//! (Johnson-Lindenstrauss).
//!
//! # Quick Start
//!
//! ```
//! use proyectar::prelude::*;
//!
//! let corpus = "Stars started shining over the starting lineup. \
//!               The starstruck crowd started cheering.";
//!
//! // Fit once on a representative corpus...
//! let mut projector = WordProjector::new();
//! projector.fit(&[corpus]).expect("fit succeeds");
//!
//! // ...then transform arbitrarily many batches.
//! let matrices = projector
//!     .transform(&["The stars were starting to shine."])
//!     .expect("transform succeeds");
//! assert_eq!(matrices.len(), 1); // one matrix per sentence
//! assert_eq!(matrices[0].n_cols(), 1120); // T=80 projections of d=14 each
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: CSR sparse matrix type
//! - [`text`]: sentence splitting, boundary-marked tokenization, similarity
//! - [`vectorize`]: char n-gram count vectorization with a fitted vocabulary
//! - [`projection`]: Achlioptas-style sparse random projection bank
//! - [`pipeline`]: the fit/transform orchestrator

pub mod error;
pub mod pipeline;
pub mod prelude;
pub mod primitives;
pub mod projection;
pub mod text;
pub mod vectorize;

pub use error::{ProyectarError, Result};
pub use primitives::CsrMatrix;
