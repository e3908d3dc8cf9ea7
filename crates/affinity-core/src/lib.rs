//! Affinity Core Library
//!
//! Computes pairwise affinity between users from fixed-length quiz-answer
//! vectors and produces a ranked, thresholded match list per user.
//!
//! # Architecture
//!
//! The crate is organized as four components composed by the pipeline:
//!
//! - [`vectorizer`]: raw answer map -> 10-dimensional feature vector
//! - [`similarity`]: cosine similarity primitives and the dense pairwise matrix
//! - [`selector`]: thresholding, ranking, and top-k truncation
//! - [`pipeline`]: orchestration over the [`UserSource`] / [`MatchSink`]
//!   boundary traits, producing a [`PipelineSummary`]
//!
//! The vectorizer, similarity engine, and selector are pure functions; all
//! I/O lives behind the boundary traits so each stage can be tested in
//! isolation.
//!
//! # Example
//!
//! ```
//! use affinity_core::{vectorize, similarity_matrix, select_matches, MatchConfig};
//! use std::collections::HashMap;
//!
//! let answers: HashMap<String, i64> =
//!     [("1".to_string(), 2), ("2".to_string(), 1)].into_iter().collect();
//! let vectors = vec![vectorize(&answers), vectorize(&answers)];
//! let matrix = similarity_matrix(&vectors).unwrap();
//! let ids = vec!["a".to_string(), "b".to_string()];
//! let results = select_matches(&matrix, &ids, &MatchConfig::default());
//! assert_eq!(results.len(), 2);
//! ```

pub mod analysis;
pub mod config;
pub mod pipeline;
pub mod selector;
pub mod similarity;
pub mod stubs;
pub mod types;
pub mod vectorizer;

// Re-exports for convenience
pub use config::{constants, MatchConfig};
pub use pipeline::{
    BoundaryError, MatchSink, Pipeline, PipelineError, PipelineOutcome, PipelineSummary,
    SubmissionFailure, UserSource,
};
pub use selector::select_matches;
pub use similarity::{cosine_similarity, similarity_matrix, SimilarityError};
pub use types::{FeatureVector, MatchEntry, UserMatches, UserRecord};
pub use vectorizer::vectorize;
