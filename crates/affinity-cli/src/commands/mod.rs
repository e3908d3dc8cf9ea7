//! CLI command handlers
//!
//! # Modules
//!
//! - `run`: end-to-end matching pipeline
//! - `analyze`: answer distribution diagnostics

pub mod analyze;
pub mod run;

use clap::Args;

use affinity_client::{ClientConfig, MatchingApiClient};

/// Connection flags shared by all commands.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// API base url (overrides AFFINITY_ENDPOINT)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bearer token for the data endpoint (overrides AFFINITY_TOKEN)
    #[arg(long)]
    pub token: Option<String>,
}

impl ConnectionArgs {
    /// Build a client config from env, with flags taking precedence.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        config
    }

    /// Build the API client, logging and mapping failure to an exit code.
    pub fn client(&self) -> Result<MatchingApiClient, i32> {
        MatchingApiClient::new(self.client_config()).map_err(|err| {
            tracing::error!(error = %err, "failed to build API client");
            eprintln!("error: {err}");
            1
        })
    }
}
