//! Relevance ordering for registry search results.
//!
//! The registry matches on aliases and acronyms too, so its order rarely
//! reflects what the user typed. Results are regrouped into three tiers by
//! comparing the query against the display name, ignoring case:
//!
//! 1. names starting with the query, alphabetically
//! 2. names containing the query elsewhere, by position of the first match
//! 3. everything else, alphabetically

use std::cmp::Ordering;

use crate::domain::entities::SearchResult;

/// Reorders `results` by relevance to `query`.
///
/// A pure reordering: no result is added or removed. Ties in the "contains"
/// tier keep their input order.
pub fn rank(results: Vec<SearchResult>, query: &str) -> Vec<SearchResult> {
    let query = query.to_lowercase();
    let mut starts_with = Vec::new();
    let mut contains = Vec::new();
    let mut others = Vec::new();

    for result in results {
        let name = result.name.to_lowercase();
        match name.find(&query) {
            Some(0) => starts_with.push(result),
            Some(byte_pos) => {
                let position = name[..byte_pos].chars().count();
                contains.push((position, result));
            }
            None => others.push(result),
        }
    }

    starts_with.sort_by(by_name);
    contains.sort_by_key(|(position, _)| *position);
    others.sort_by(by_name);

    starts_with
        .into_iter()
        .chain(contains.into_iter().map(|(_, result)| result))
        .chain(others)
        .collect()
}

fn by_name(a: &SearchResult, b: &SearchResult) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}
