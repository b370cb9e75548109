//! A registry organization ready to be shown to the user.

use serde::Serialize;

/// An organization found in the registry.
///
/// `id` is the canonical URI of the organization in the registry and is the
/// identity of the result. `name` is the disambiguated display name derived
/// from the registry item; it is recomputed on every search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
}

impl SearchResult {
    /// Creates a new SearchResult instance.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
