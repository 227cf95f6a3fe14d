//! Core aggregator: concurrent category fan-out, failure absorption, dedup.
//!
//! Queries every configured category endpoint concurrently, waits for all
//! of them to settle, treats any failed category as zero results, and
//! merges the per-category lists in the fixed category order with
//! first-seen `cca3` deduplication.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::lookup;
use crate::types::Country;

use super::dedup::dedup_by_cca3;

/// Aggregate a concurrent search across all configured categories.
///
/// # Pipeline
///
/// 1. Fan out one lookup per category in `config.categories` with
///    [`futures::future::join_all`]; no request cancels or short-circuits
///    another
/// 2. Wait for every lookup to settle (success or failure)
/// 3. Absorb per-category failures as zero results, logging them at warn
///    level when `config.log_failed_categories` is set and trace level
///    otherwise
/// 4. Concatenate per-category lists in category order
/// 5. Deduplicate by `cca3`, first occurrence wins
///
/// # Errors
///
/// Returns [`SearchError::Http`] only if the HTTP client itself cannot be
/// constructed. Category outcomes never produce an error: a query where
/// every category fails resolves to `Ok` with an empty list, which callers
/// cannot distinguish from a query that genuinely matched nothing.
pub async fn aggregate_search(
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<Country>, SearchError> {
    let client = http::build_client(config)?;

    // 1. Fan out to all categories concurrently.
    let lookups: Vec<_> = config
        .categories
        .iter()
        .map(|&category| {
            let client = client.clone();
            let value = query.to_string();
            async move {
                let outcome = lookup::fetch_category(&client, category, &value, config).await;
                (category, outcome)
            }
        })
        .collect();

    // 2. Wait for all to settle.
    let outcomes = futures::future::join_all(lookups).await;

    // 3/4. Collect in category order, absorbing failures.
    let mut merged: Vec<Country> = Vec::new();
    for (category, outcome) in outcomes {
        match outcome {
            Ok(countries) => {
                tracing::debug!(%category, count = countries.len(), "category returned records");
                merged.extend(countries);
            }
            Err(err) => {
                if config.log_failed_categories {
                    tracing::warn!(%category, error = %err, "category lookup failed");
                } else {
                    tracing::trace!(%category, error = %err, "category lookup failed");
                }
            }
        }
    }

    // 5. Deduplicate by cca3, first seen wins.
    Ok(dedup_by_cca3(merged))
}
