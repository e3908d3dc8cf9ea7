//! In-memory boundary implementations for tests.
//!
//! `StaticUserSource` and `RecordingSink` implement the pipeline boundary
//! traits without any transport, so pipeline behavior can be tested offline
//! with small datasets. Not intended for production use.

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::pipeline::{BoundaryError, MatchSink, UserSource};
use crate::types::{UserMatches, UserRecord};

/// A [`UserSource`] serving a fixed batch of records.
#[derive(Debug, Default)]
pub struct StaticUserSource {
    users: Vec<UserRecord>,
    unavailable: bool,
}

impl StaticUserSource {
    /// Source that yields the given records on every fetch.
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            unavailable: false,
        }
    }

    /// Source whose fetch always fails, for exercising the
    /// data-unavailable path.
    pub fn unavailable() -> Self {
        Self {
            users: Vec::new(),
            unavailable: true,
        }
    }
}

#[async_trait]
impl UserSource for StaticUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, BoundaryError> {
        if self.unavailable {
            return Err("matching data endpoint unreachable".into());
        }
        debug!(users = self.users.len(), "static source serving records");
        Ok(self.users.clone())
    }
}

/// A [`MatchSink`] that records every submission it accepts.
///
/// Failures can be injected per source user id to exercise the pipeline's
/// partial-failure handling.
#[derive(Debug, Default)]
pub struct RecordingSink {
    accepted: Mutex<Vec<UserMatches>>,
    fail_for: Mutex<HashSet<String>>,
}

impl RecordingSink {
    /// Sink that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject submissions for the given source user id.
    pub fn fail_for(&self, user_id: impl Into<String>) {
        self.fail_for.lock().insert(user_id.into());
    }

    /// All results accepted so far, in submission order.
    pub fn accepted(&self) -> Vec<UserMatches> {
        self.accepted.lock().clone()
    }

    /// Number of accepted results.
    pub fn accepted_count(&self) -> usize {
        self.accepted.lock().len()
    }
}

#[async_trait]
impl MatchSink for RecordingSink {
    async fn submit(&self, result: &UserMatches) -> Result<(), BoundaryError> {
        if self.fail_for.lock().contains(&result.source_user_id) {
            return Err(format!(
                "injected submission failure for {}",
                result.source_user_id
            )
            .into());
        }
        self.accepted.lock().push(result.clone());
        Ok(())
    }
}
