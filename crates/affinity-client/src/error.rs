//! Error types for the matching API client.

use thiserror::Error;

/// Errors from matching API calls.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if readable
        message: String,
    },

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type ApiClientResult<T> = Result<T, ApiClientError>;
