//! Application layer services implementing the lookup logic.
//!
//! This layer orchestrates the registry HTTP client and the local store. Its
//! services consume the repository trait and the HTTP client and expose a
//! single search entry point to callers.
//!
//! # Available Services
//!
//! - [`services::registry_service::RegistryService`] - Registry search with fallback
//! - [`services::local_search::LocalOrgSearch`] - Local store search
//! - [`services::ranking::rank`] - Relevance ordering of registry results

pub mod services;
