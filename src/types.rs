//! Core types: the country record and the endpoint category axes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single country record as returned by the data source.
///
/// Only `cca3` is required — a payload record without a string `cca3` is a
/// decode failure for the whole response. The other known fields are
/// optional, and any source field this crate does not model is preserved in
/// [`Country::extra`] so records round-trip losslessly through serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code. The unique identity of a record; the
    /// aggregator deduplicates on this field.
    pub cca3: String,
    /// ISO 3166-1 alpha-2 code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cca2: Option<String>,
    /// Common and official country names.
    #[serde(default)]
    pub name: CountryName,
    /// Capital city names. Some countries have several, some none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capital: Vec<String>,
    /// Continent-level region, e.g. `"Europe"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Finer-grained subregion, e.g. `"Western Europe"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    /// `[latitude, longitude]` of the country centroid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub latlng: Vec<f64>,
    /// Flag image URLs.
    #[serde(default)]
    pub flags: Flags,
    /// Currency code → currency details, e.g. `"EUR"` → euro/`€`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub currencies: BTreeMap<String, Currency>,
    /// Language code → language name, e.g. `"fra"` → `"French"`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, String>,
    /// Source fields this crate does not model, passed through unexamined.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Common and official names of a country.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryName {
    /// Everyday name, e.g. `"France"`.
    #[serde(default)]
    pub common: String,
    /// Formal name, e.g. `"French Republic"`.
    #[serde(default)]
    pub official: String,
}

/// Flag image URLs for a country.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    /// Alt text describing the flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A currency used by a country.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// Classification axes the data source exposes as lookup endpoints.
///
/// The order of [`Category::all`] is fixed and meaningful: the aggregator
/// scans per-category results in this order when building its merged,
/// first-seen-wins output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Lookup by common or official country name.
    Name,
    /// Lookup by ISO 3166-1 alpha-2/alpha-3 code.
    Alpha,
    /// Lookup by currency code or currency name.
    Currency,
    /// Lookup by language code or language name.
    Lang,
    /// Lookup by capital city.
    Capital,
    /// Lookup by continent-level region.
    Region,
    /// Lookup by subregion.
    Subregion,
}

impl Category {
    /// Returns the REST path component for this category,
    /// as in `GET {base}/<segment>/<value>`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Alpha => "alpha",
            Self::Currency => "currency",
            Self::Lang => "lang",
            Self::Capital => "capital",
            Self::Region => "region",
            Self::Subregion => "subregion",
        }
    }

    /// Returns all category variants in the fixed scan order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Name,
            Self::Alpha,
            Self::Currency,
            Self::Lang,
            Self::Capital,
            Self::Region,
            Self::Subregion,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}
