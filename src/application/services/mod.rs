//! Lookup services for the application layer.

pub mod local_search;
pub mod ranking;
pub mod registry_service;

pub use local_search::LocalOrgSearch;
pub use ranking::rank;
pub use registry_service::{PageFetch, RegistryService};
