//! Error types for similarity computation.

use thiserror::Error;

/// Errors from dense vector similarity computation.
///
/// Zero-magnitude vectors are not an error: cosine similarity against a
/// zero vector is defined as 0.0 (see [`super::cosine_similarity`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// Dimension mismatch between vectors.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },
}
