//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ApiClientError, ApiClientResult};

/// Configuration for [`crate::MatchingApiClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClientConfig {
    /// API base url, without a trailing slash.
    pub base_url: String,
    /// Bearer token sent on the data endpoint. The token is opaque to this
    /// client; it is passed through, never inspected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("AFFINITY_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:5000/api".to_string()),
            token: std::env::var("AFFINITY_TOKEN").ok(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ApiClientResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiClientError::Config("base_url cannot be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ApiClientError::Config("timeout_secs must be > 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let config = ClientConfig {
            base_url: String::new(),
            token: None,
            timeout_secs: 30,
        };
        assert!(matches!(config.validate(), Err(ApiClientError::Config(_))));
    }

    #[test]
    fn test_validate_accepts_missing_token() {
        let config = ClientConfig {
            base_url: "http://localhost:5000/api".to_string(),
            token: None,
            timeout_secs: 30,
        };
        assert!(config.validate().is_ok());
    }
}
