//! Typed schema of a registry search response page.
//!
//! Every field the registry may leave out is optional; filtering and
//! disambiguation work over these options instead of untyped key lookups.
//! Decoding is lenient below the page level: a bad count or a bad `links`
//! value falls back to a default, and an item of the wrong shape is dropped
//! on its own without failing the page.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::entities::SearchResult;
use crate::utils::org_name::display_name;

/// One page of registry search results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegistryPage {
    /// Total number of results the registry reports across all pages.
    #[serde(
        default = "default_number_of_results",
        deserialize_with = "lenient_count"
    )]
    pub number_of_results: u64,
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Vec<RegistryItem>,
}

/// A missing count is read as a single result, which keeps the search to one page.
fn default_number_of_results() -> u64 {
    1
}

/// Accepts a non-negative number or a numeric string; anything else counts as
/// a missing value.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(count.unwrap_or_else(default_number_of_results))
}

/// Decodes each item on its own. `null` means no items; any other non-array
/// value is a malformed page.
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<RegistryItem>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(values) => Ok(values
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::debug!(error = %e, "Dropping malformed registry item");
                    None
                }
            })
            .collect()),
        other => Err(serde::de::Error::custom(format!(
            "expected an array of items, found {other}"
        ))),
    }
}

/// Keeps the position of every link; entries that are not strings become `None`.
fn lenient_links<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .map(|value| match value {
                Value::String(link) => Some(link),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

impl RegistryPage {
    /// The page used when the registry answers with a non-2xx status.
    pub fn empty() -> Self {
        Self {
            number_of_results: 0,
            items: Vec::new(),
        }
    }

    /// Converts the valid items of this page into search results.
    ///
    /// Items missing `id` or `name` are dropped.
    pub fn into_results(self) -> Vec<SearchResult> {
        self.items
            .into_iter()
            .filter_map(RegistryItem::into_result)
            .collect()
    }
}

/// A single organization as returned by the registry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegistryItem {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_links")]
    pub links: Vec<Option<String>>,
    pub country: Option<RegistryCountry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegistryCountry {
    pub country_name: Option<String>,
}

impl RegistryItem {
    /// First link of the item, if any.
    pub fn first_link(&self) -> Option<&str> {
        self.links.first().and_then(Option::as_deref)
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country
            .as_ref()
            .and_then(|country| country.country_name.as_deref())
    }

    /// Builds a search result, or `None` if `id` or `name` is missing or blank.
    pub fn into_result(self) -> Option<SearchResult> {
        let id = self.id.as_deref().filter(|id| !id.trim().is_empty())?;
        let name = self.name.as_deref().filter(|name| !name.trim().is_empty())?;

        Some(SearchResult::new(
            id,
            display_name(name, self.first_link(), self.country_name()),
        ))
    }
}
