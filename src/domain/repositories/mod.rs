//! Repository trait definitions for the domain layer.
//!
//! The local organization store is an external collaborator: only its query
//! contract lives here. Implementations live in `crate::infrastructure::persistence`,
//! and a mock is generated via `mockall` for unit tests.

pub mod org_repository;

pub use org_repository::OrgRepository;

#[cfg(test)]
pub use org_repository::MockOrgRepository;
