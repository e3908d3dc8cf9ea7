//! Dense vector similarity: cosine primitives and the pairwise matrix.
//!
//! Vectors here are 10-dimensional quiz feature vectors, small enough that
//! the full n x n matrix is computed densely in one batch. This is designed
//! for offline batch scoring, not interactive lookup; there is no
//! incremental update path.

mod error;
mod matrix;
mod primitives;


pub use error::SimilarityError;
pub use matrix::similarity_matrix;
pub use primitives::{cosine_similarity, dot_product, l2_norm};
