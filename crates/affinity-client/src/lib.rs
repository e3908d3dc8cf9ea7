//! HTTP client for the matching API.
//!
//! Two endpoints, one attempt each, no retry:
//!
//! - `GET {base_url}/matching/data` with a bearer token: the batch of user
//!   records awaiting matching, wrapped in the API's response envelope.
//! - `POST {base_url}/matching/results`: one computed match result per call.
//!
//! [`MatchingApiClient`] implements the core pipeline's boundary traits, so
//! it plugs straight into `affinity_core::Pipeline`.
//!
//! # Configuration
//!
//! [`ClientConfig`] reads defaults from environment variables:
//! - `AFFINITY_ENDPOINT`: API base url (default `http://localhost:5000/api`)
//! - `AFFINITY_TOKEN`: bearer token for the data endpoint

mod config;
mod error;
pub mod wire;

pub use config::ClientConfig;
pub use error::{ApiClientError, ApiClientResult};

use async_trait::async_trait;
use tracing::{debug, info};

use affinity_core::{BoundaryError, MatchSink, UserMatches, UserRecord, UserSource};

use wire::{Envelope, MatchingData};

/// Client for the matching API.
///
/// Cheap to clone; the underlying `reqwest::Client` is a shared handle.
#[derive(Debug, Clone)]
pub struct MatchingApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl MatchingApiClient {
    /// Build a client from config.
    ///
    /// # Errors
    /// - `ApiClientError::Config` if the config is invalid
    /// - `ApiClientError::Http` if the underlying client cannot be built
    pub fn new(config: ClientConfig) -> ApiClientResult<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Client with configuration from environment variables.
    pub fn from_env() -> ApiClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Fetch the batch of user records awaiting matching.
    pub async fn fetch_matching_data(&self) -> ApiClientResult<Vec<UserRecord>> {
        let url = format!("{}/matching/data", self.config.base_url);
        debug!(%url, "fetching matching data");

        let mut request = self.http.get(&url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiClientError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let envelope: Envelope<MatchingData> = response.json().await?;
        info!(users = envelope.data.users.len(), "fetched matching data");
        Ok(envelope.data.users)
    }

    /// Submit one match result.
    pub async fn submit_matches(&self, result: &UserMatches) -> ApiClientResult<()> {
        let url = format!("{}/matching/results", self.config.base_url);
        debug!(
            %url,
            user_id = %result.source_user_id,
            matches = result.matches.len(),
            "submitting match result"
        );

        let response = self.http.post(&url).json(result).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiClientError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserSource for MatchingApiClient {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, BoundaryError> {
        self.fetch_matching_data().await.map_err(Into::into)
    }
}

#[async_trait]
impl MatchSink for MatchingApiClient {
    async fn submit(&self, result: &UserMatches) -> Result<(), BoundaryError> {
        self.submit_matches(result).await.map_err(Into::into)
    }
}
