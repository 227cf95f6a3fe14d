//! # country-search
//!
//! Embedded country lookup and search aggregation over a REST country
//! dataset (REST Countries v3.1 wire shape). This is a library, not a
//! server: no network listeners, no persisted state, no API keys.
//!
//! ## Design
//!
//! - Typed, serde-validated country records keyed by ISO 3166-1 alpha-3
//!   code (`cca3`); unmodelled source fields pass through losslessly
//! - Free-text search fans out to seven classification endpoints (name,
//!   alpha, currency, lang, capital, region, subregion) concurrently and
//!   merges the results
//! - Graceful degradation: a failed category contributes zero results;
//!   even total failure resolves to an empty list, never an error
//! - Deterministic output: first-seen order scanning categories in their
//!   fixed order, each `cca3` at most once
//!
//! ## Security
//!
//! - No secrets to leak; the data source is a public API
//! - Queries are logged only at trace level

pub mod aggregator;
pub mod config;
pub mod error;
pub mod http;
pub mod lookup;
pub mod types;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use lookup::{fetch_all, fetch_by_name, fetch_by_region};
pub use types::{Category, Country};

/// Search for countries across all configured category endpoints.
///
/// Queries every category in `config.categories` concurrently, waits for
/// all of them to settle, and returns the merged results deduplicated by
/// `cca3` in first-seen order.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid, or
/// [`SearchError::Http`] if the HTTP client cannot be constructed.
/// Individual category failures never surface: a query where every
/// category fails resolves to an empty list.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> country_search::Result<()> {
/// let config = country_search::SearchConfig::default();
/// let countries = country_search::search("euro", &config).await?;
/// for country in &countries {
///     println!("{}: {}", country.cca3, country.name.common);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<Country>> {
    config.validate()?;
    aggregator::search::aggregate_search(query, config).await
}

/// Search for countries with the default configuration.
///
/// Convenience wrapper around [`search`] using [`SearchConfig::default()`].
///
/// # Errors
///
/// Same as [`search`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> country_search::Result<()> {
/// let countries = country_search::search_default("caribbean").await?;
/// for country in &countries {
///     println!("{}", country.name.common);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_default(query: &str) -> Result<Vec<Country>> {
    search(query, &SearchConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = search("france", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout_seconds"));
    }

    #[tokio::test]
    async fn search_validates_config_empty_categories() {
        let config = SearchConfig {
            categories: vec![],
            ..Default::default()
        };
        let result = search("france", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("category"));
    }

    #[tokio::test]
    async fn search_validates_config_empty_base_url() {
        let config = SearchConfig {
            base_url: String::new(),
            ..Default::default()
        };
        let result = search("france", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base_url"));
    }
}
