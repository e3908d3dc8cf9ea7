//! Match selection configuration.
//!
//! Thresholds and limits that were implicit constants in earlier matching
//! scripts live here as an explicit configuration structure passed into the
//! pipeline at construction.

use serde::{Deserialize, Serialize};

/// Named constants for the fixed quiz schema.
pub mod constants {
    /// Number of quiz questions; also the feature vector dimension.
    /// Question ids are the string forms of 1..=QUESTION_COUNT.
    pub const QUESTION_COUNT: usize = 10;

    /// Number of answer choices per question (answer indices 0..=3).
    pub const ANSWER_CHOICES: usize = 4;

    /// Default minimum similarity score for a pair to be reported.
    pub const DEFAULT_THRESHOLD: f32 = 0.75;

    /// Default maximum number of match entries retained per source user.
    pub const DEFAULT_TOP_K: usize = 10;
}

/// Configuration for match selection.
///
/// # Default Configuration
///
/// Threshold 0.75, top-k 10. Both are operator-tunable; an out-of-range
/// threshold is accepted as-is and simply yields zero (> 1.0) or
/// all-inclusive (< -1.0) results.
///
/// # Example
///
/// ```
/// use affinity_core::MatchConfig;
///
/// let config = MatchConfig::default().with_threshold(0.9).with_top_k(3);
/// assert_eq!(config.top_k, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum similarity score (inclusive) for a candidate pair to be
    /// reported as a match. Default: 0.75.
    pub threshold: f32,

    /// Maximum number of highest-scoring match entries retained per source
    /// user. Default: 10.
    pub top_k: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: constants::DEFAULT_THRESHOLD,
            top_k: constants::DEFAULT_TOP_K,
        }
    }
}

impl MatchConfig {
    /// Set the similarity threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the per-user match limit.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.threshold, constants::DEFAULT_THRESHOLD);
        assert_eq!(config.top_k, constants::DEFAULT_TOP_K);
    }

    #[test]
    fn test_builder_helpers() {
        let config = MatchConfig::default().with_threshold(0.5).with_top_k(1);
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.top_k, 1);
    }
}
