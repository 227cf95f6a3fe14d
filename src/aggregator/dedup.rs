//! Order-preserving deduplication by `cca3`.
//!
//! The same country routinely matches several category endpoints (a query
//! like `"fr"` hits both `name` and `alpha`), so the merged list needs
//! exactly-once semantics. First occurrence wins; relative order of the
//! survivors is unchanged.

use std::collections::HashSet;

use crate::types::Country;

/// Deduplicate country records by `cca3`, keeping the first occurrence
/// and the input's relative order.
pub fn dedup_by_cca3(countries: Vec<Country>) -> Vec<Country> {
    let mut seen: HashSet<String> = HashSet::with_capacity(countries.len());
    let mut unique = Vec::with_capacity(countries.len());

    for country in countries {
        if seen.insert(country.cca3.clone()) {
            unique.push(country);
        }
    }

    unique
}
