//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which categories are queried, the data source
//! base URL, timeouts, and diagnostic logging of failed categories.

use crate::error::SearchError;
use crate::types::Category;

/// Default REST Countries base URL (version prefix included).
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Configuration for country lookup and search operations.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the data source, including any version prefix.
    /// Endpoints are addressed as `{base_url}/<segment>/<value>`.
    pub base_url: String,
    /// Which categories the aggregator queries. Queried concurrently;
    /// results are merged in this order.
    pub categories: Vec<Category>,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, a built-in crate identifier
    /// is used.
    pub user_agent: Option<String>,
    /// Log failed category lookups at warn level. Off by default;
    /// failures are still visible at trace level.
    pub log_failed_categories: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            categories: Category::all().to_vec(),
            timeout_seconds: 8,
            user_agent: None,
            log_failed_categories: false,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `categories` must not be empty
    /// - `base_url` must not be empty
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.categories.is_empty() {
            return Err(SearchError::Config(
                "at least one category must be enabled".into(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(SearchError::Config("base_url must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url, "https://restcountries.com/v3.1");
        assert_eq!(config.timeout_seconds, 8);
        assert!(config.user_agent.is_none());
        assert!(!config.log_failed_categories);
    }

    #[test]
    fn default_categories_are_all_seven_in_order() {
        let config = SearchConfig::default();
        assert_eq!(config.categories, Category::all().to_vec());
        assert_eq!(config.categories[0], Category::Name);
        assert_eq!(config.categories[6], Category::Subregion);
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn empty_categories_rejected() {
        let config = SearchConfig {
            categories: vec![],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn empty_base_url_rejected() {
        let config = SearchConfig {
            base_url: "  ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn single_category_valid() {
        let config = SearchConfig {
            categories: vec![Category::Capital],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_user_agent() {
        let config = SearchConfig {
            user_agent: Some("AtlasBot/1.0".into()),
            ..Default::default()
        };
        assert_eq!(config.user_agent.as_deref(), Some("AtlasBot/1.0"));
        assert!(config.validate().is_ok());
    }
}
