//! Core entities of the organization lookup.
//!
//! # Entity Types
//!
//! - [`SearchResult`] - A registry organization with its display name
//! - [`RegistryPage`] / [`RegistryItem`] - Typed schema of one registry response page
//! - [`LocalOrg`] - A record from the local organization store
//! - [`OrgMatches`] - The outcome of a search, tagged by the source that answered

pub mod local_org;
pub mod org_matches;
pub mod registry_page;
pub mod search_result;

pub use local_org::LocalOrg;
pub use org_matches::OrgMatches;
pub use registry_page::{RegistryCountry, RegistryItem, RegistryPage};
pub use search_result::SearchResult;
