//! Single-endpoint lookups against the country data source.
//!
//! Every endpoint shares one shape: `GET {base}/<segment>/<value>` returns
//! a JSON array of country records or an error status. [`fetch_category`]
//! is the primitive the aggregator fans out over; [`fetch_all`],
//! [`fetch_by_name`] and [`fetch_by_region`] are the direct lookups the
//! surrounding application uses for its directory and region views.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::{Category, Country};
use url::Url;

/// Build `{base}/{segment}/{value}`, percent-encoding `value` as a single
/// path segment so queries like `new zealand` or `a/b` cannot alter the
/// request path.
fn endpoint_url(base: &str, segment: &str, value: Option<&str>) -> Result<Url, SearchError> {
    let mut url = Url::parse(base)
        .map_err(|e| SearchError::Config(format!("invalid base_url {base:?}: {e}")))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| SearchError::Config(format!("base_url cannot be a base: {base}")))?;
        segments.pop_if_empty();
        segments.push(segment);
        if let Some(value) = value {
            segments.push(value);
        }
    }
    Ok(url)
}

/// Issue the request and decode the response as an array of records.
async fn get_countries(client: &reqwest::Client, url: Url) -> Result<Vec<Country>, SearchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("request to {url} failed: {e}")))?
        .error_for_status()
        .map_err(|e| SearchError::Http(e.to_string()))?;

    response
        .json::<Vec<Country>>()
        .await
        .map_err(|e| SearchError::Decode(format!("unexpected payload from {url}: {e}")))
}

/// Fetch every country record the data source knows about (`GET {base}/all`).
///
/// # Errors
///
/// Returns [`SearchError::Http`] on transport errors or non-2xx responses,
/// [`SearchError::Decode`] if the payload is not an array of records.
pub async fn fetch_all(config: &SearchConfig) -> Result<Vec<Country>, SearchError> {
    let client = http::build_client(config)?;
    get_countries(&client, endpoint_url(&config.base_url, "all", None)?).await
}

/// Fetch countries matching `name` (`GET {base}/name/{name}`).
///
/// # Errors
///
/// Same as [`fetch_all`]. A name the source does not know yields a non-2xx
/// response and therefore [`SearchError::Http`].
pub async fn fetch_by_name(name: &str, config: &SearchConfig) -> Result<Vec<Country>, SearchError> {
    let client = http::build_client(config)?;
    fetch_category(&client, Category::Name, name, config).await
}

/// Fetch countries in `region` (`GET {base}/region/{region}`).
///
/// # Errors
///
/// Same as [`fetch_all`].
pub async fn fetch_by_region(
    region: &str,
    config: &SearchConfig,
) -> Result<Vec<Country>, SearchError> {
    let client = http::build_client(config)?;
    fetch_category(&client, Category::Region, region, config).await
}

/// Fetch countries matching `value` on one classification axis.
///
/// This is the primitive the aggregator fans out over; it surfaces
/// failures, and the aggregator decides whether to absorb them.
///
/// # Errors
///
/// Same as [`fetch_all`].
pub async fn fetch_category(
    client: &reqwest::Client,
    category: Category,
    value: &str,
    config: &SearchConfig,
) -> Result<Vec<Country>, SearchError> {
    tracing::trace!(%category, value, "category lookup");
    get_countries(
        client,
        endpoint_url(&config.base_url, category.path_segment(), Some(value))?,
    )
    .await
}
