//! Error types for the country-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Category-level failures inside the
//! aggregator are absorbed and never surface as these errors; direct
//! lookups propagate them.

/// Errors that can occur during country lookup operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to the data source failed (transport error or
    /// non-2xx status).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The data source returned a payload that is not an array of
    /// country records with a `cca3` field.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for country-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_decode() {
        let err = SearchError::Decode("expected an array".into());
        assert_eq!(err.to_string(), "decode error: expected an array");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("timeout_seconds must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: timeout_seconds must be greater than 0"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
