//! Shared HTTP client construction for data source requests.
//!
//! Provides a configured [`reqwest::Client`] with the configured timeout,
//! gzip/brotli decompression, and a crate-identifying User-Agent.

use crate::config::SearchConfig;
use crate::error::SearchError;
use std::time::Duration;

/// Default User-Agent identifying this crate to the data source.
const DEFAULT_USER_AGENT: &str = concat!("country-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for data source requests.
///
/// The client has:
/// - Timeout from config
/// - Crate-identifying User-Agent (or custom if configured)
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => DEFAULT_USER_AGENT.to_owned(),
    };

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_client_with_default_config() {
        let config = SearchConfig::default();
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn build_client_with_custom_ua() {
        let config = SearchConfig {
            user_agent: Some("AtlasBot/1.0".into()),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn default_user_agent_names_the_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("country-search/"));
    }
}
