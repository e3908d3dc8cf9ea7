//! Pipeline orchestration over the fetch/submit boundaries.
//!
//! The pipeline is a sequential, single-pass batch job:
//! fetch -> vectorize -> similarity matrix -> select -> submit each result.
//! Both boundaries are async traits so transports stay out of this crate;
//! tests use the in-memory implementations in [`crate::stubs`].

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::selector::select_matches;
use crate::similarity::{similarity_matrix, SimilarityError};
use crate::types::{UserMatches, UserRecord};
use crate::vectorizer::vectorize;

/// Boxed error carried across the fetch/submit boundaries.
pub type BoundaryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Source of user records (e.g. the matching data endpoint).
///
/// A failed fetch aborts the pipeline before any computation.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the full batch of user records, once per run.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, BoundaryError>;
}

/// Sink accepting one computed match result at a time.
///
/// Submissions are independent and at-most-once; a failure is recorded in
/// the summary without aborting the remaining submissions.
#[async_trait]
pub trait MatchSink: Send + Sync {
    /// Submit one match result.
    async fn submit(&self, result: &UserMatches) -> Result<(), BoundaryError>;
}

#[async_trait]
impl<T: UserSource> UserSource for &T {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, BoundaryError> {
        (**self).fetch_users().await
    }
}

#[async_trait]
impl<T: MatchSink> MatchSink for &T {
    async fn submit(&self, result: &UserMatches) -> Result<(), BoundaryError> {
        (**self).submit(result).await
    }
}

/// Fatal pipeline errors.
///
/// Business-level conditions (no data, no matches, partial submission
/// failures) are not errors; they are reported through the summary.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The fetch boundary failed; no computation was attempted.
    #[error("matching data unavailable: {0}")]
    DataUnavailable(#[source] BoundaryError),

    /// A vector violated the similarity engine's structural contract.
    #[error(transparent)]
    Similarity(#[from] SimilarityError),
}

/// How a pipeline run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipelineOutcome {
    /// Matches were computed and submissions attempted.
    Completed,
    /// The source returned zero users; nothing was computed.
    NoData,
    /// No pair met the threshold; the sink was never invoked.
    NoMatches,
}

impl std::fmt::Display for PipelineOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::NoData => write!(f, "no data"),
            Self::NoMatches => write!(f, "no matches above threshold"),
        }
    }
}

/// One failed submission, recorded in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionFailure {
    /// Source user whose result could not be submitted.
    pub user_id: String,
    /// Stringified cause from the sink.
    pub cause: String,
}

/// Final report of a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSummary {
    /// How the run ended.
    pub outcome: PipelineOutcome,
    /// Users returned by the source.
    pub users_fetched: usize,
    /// Users with at least one qualifying match.
    pub users_matched: usize,
    /// Match entries across all results.
    pub total_match_entries: usize,
    /// Results accepted by the sink.
    pub results_submitted: usize,
    /// Per-result submission failures, in submission order.
    pub failures: Vec<SubmissionFailure>,
}

impl PipelineSummary {
    fn early(outcome: PipelineOutcome, users_fetched: usize) -> Self {
        Self {
            outcome,
            users_fetched,
            users_matched: 0,
            total_match_entries: 0,
            results_submitted: 0,
            failures: Vec::new(),
        }
    }

    /// Results that could not be submitted.
    pub fn results_failed(&self) -> usize {
        self.failures.len()
    }
}

/// Sequential batch matching pipeline.
///
/// Holds its configuration explicitly; there are no module-level tuning
/// constants. Duplicate user ids are not validated here: each input row is
/// scored and emitted independently, so duplicates produce duplicate source
/// rows. Deduplication belongs to the data owner.
pub struct Pipeline<S, K> {
    source: S,
    sink: K,
    config: MatchConfig,
}

impl<S: UserSource, K: MatchSink> Pipeline<S, K> {
    /// Create a pipeline over a source and sink with the given config.
    pub fn new(source: S, sink: K, config: MatchConfig) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    /// Run the pipeline once and report a summary.
    ///
    /// # Errors
    /// - [`PipelineError::DataUnavailable`] if the fetch fails
    /// - [`PipelineError::Similarity`] if a vector violates the engine's
    ///   structural contract (cannot happen for vectors from the built-in
    ///   vectorizer)
    pub async fn run(&self) -> Result<PipelineSummary, PipelineError> {
        let users = self
            .source
            .fetch_users()
            .await
            .map_err(PipelineError::DataUnavailable)?;
        info!(users = users.len(), "fetched user records");

        if users.is_empty() {
            info!("no user data available, skipping computation");
            return Ok(PipelineSummary::early(PipelineOutcome::NoData, 0));
        }

        let user_ids: Vec<String> = users.iter().map(|u| u.user_id.clone()).collect();
        let vectors: Vec<_> = users.iter().map(|u| vectorize(&u.quiz_answers)).collect();

        let matrix = similarity_matrix(&vectors)?;
        debug!(side = matrix.len(), "computed similarity matrix");

        let results = select_matches(&matrix, &user_ids, &self.config);
        if results.is_empty() {
            info!(
                threshold = self.config.threshold,
                "no matches above threshold"
            );
            return Ok(PipelineSummary::early(
                PipelineOutcome::NoMatches,
                users.len(),
            ));
        }

        let total_match_entries: usize = results.iter().map(|r| r.matches.len()).sum();
        info!(
            users_matched = results.len(),
            total_match_entries, "selected matches, submitting results"
        );

        let mut results_submitted = 0;
        let mut failures = Vec::new();
        for result in &results {
            match self.sink.submit(result).await {
                Ok(()) => {
                    debug!(
                        user_id = %result.source_user_id,
                        matches = result.matches.len(),
                        "submitted match result"
                    );
                    results_submitted += 1;
                }
                Err(cause) => {
                    warn!(
                        user_id = %result.source_user_id,
                        error = %cause,
                        "failed to submit match result"
                    );
                    failures.push(SubmissionFailure {
                        user_id: result.source_user_id.clone(),
                        cause: cause.to_string(),
                    });
                }
            }
        }

        Ok(PipelineSummary {
            outcome: PipelineOutcome::Completed,
            users_fetched: users.len(),
            users_matched: results.len(),
            total_match_entries,
            results_submitted,
            failures,
        })
    }
}
