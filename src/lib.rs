//! # Org Lookup
//!
//! Resolves free-text organization names into canonical registry records,
//! backing autocomplete-style lookups. The institutional registry is queried
//! over HTTP; when it is down or returns malformed data, a local organization
//! store answers instead.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, registry payload schema and the store trait
//! - **Application Layer** ([`application`]) - Search orchestration, fallback and ranking
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP transport/client and local stores
//! - **Utilities** ([`utils`]) - Display-name disambiguation
//!
//! ## Search Flow
//!
//! 1. Blank names return nothing, without any request
//! 2. The registry heartbeat decides between remote and local search
//! 3. Page 1 is fetched; further pages follow up to `max_pages`
//! 4. Items without `id` or `name` are dropped, the rest get a disambiguated name
//! 5. Results are ranked: starts-with, then contains, then the rest
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use config::{Config, RegistryConfig};
pub use error::{HttpError, StoreError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LocalOrgSearch, RegistryService, rank};
    pub use crate::config::RegistryConfig;
    pub use crate::domain::entities::{LocalOrg, OrgMatches, SearchResult};
    pub use crate::domain::repositories::OrgRepository;
    pub use crate::infrastructure::http::{
        HttpResponse, HttpTransport, RegistryHttpClient, ReqwestTransport,
    };
    pub use crate::infrastructure::persistence::MemoryOrgRepository;
}
