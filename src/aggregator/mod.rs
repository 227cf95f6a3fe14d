//! Search aggregator: concurrent multi-category fan-out and dedup.
//!
//! This module fans a free-text query out to every configured category
//! endpoint concurrently, absorbs per-category failures as empty results,
//! and merges the per-category lists into one sequence deduplicated by
//! `cca3` in first-seen order.

pub mod dedup;
pub mod search;
