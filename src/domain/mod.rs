//! Domain layer containing the lookup data model.
//!
//! This module defines the entities exchanged between the registry client, the
//! local fallback store and callers, plus the repository interface the local
//! store must satisfy. It has no dependencies on the HTTP or storage layers.
//!
//! # Architecture
//!
//! - [`entities`] - Search results, registry payload schema, local records
//! - [`repositories`] - Local organization store trait
//!
//! # Search Flow
//!
//! 1. Caller invokes [`crate::application::services::RegistryService::search`]
//! 2. Registry pages are decoded into [`entities::RegistryPage`]
//! 3. Valid items become [`entities::SearchResult`] with a disambiguated name
//! 4. If the registry is unavailable, [`repositories::OrgRepository`] answers
//!    with [`entities::LocalOrg`] records instead

pub mod entities;
pub mod repositories;
