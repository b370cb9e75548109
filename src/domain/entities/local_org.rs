//! Organization record owned by the local organization store.

use serde::{Deserialize, Serialize};

/// An organization known to the local store.
///
/// The store owns the lifecycle of these records; the lookup only reads them.
/// Exactly one record is expected to carry `is_other = true`: the placeholder
/// for "my organization isn't listed", which never appears in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalOrg {
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub is_other: bool,
}

impl LocalOrg {
    /// Creates a regular (non-placeholder) organization record.
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            is_other: false,
        }
    }

    /// Creates the placeholder "other" organization record.
    pub fn other(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: String::new(),
            is_other: true,
        }
    }

    /// Returns true if `term` occurs in the name or abbreviation, ignoring case.
    ///
    /// `term` must already be lowercase.
    pub fn matches_lowercase(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.abbreviation.to_lowercase().contains(term)
    }
}
