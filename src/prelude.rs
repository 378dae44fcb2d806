//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use proyectar::prelude::*;
//! ```

pub use crate::error::{ProyectarError, Result};
pub use crate::pipeline::WordProjector;
pub use crate::primitives::CsrMatrix;
pub use crate::projection::ProjectionBank;
pub use crate::text::similarity::cosine_similarity;
pub use crate::text::{BoundaryTokenizer, SentenceSplitter, Tokenizer};
pub use crate::vectorize::CharNGramVectorizer;
