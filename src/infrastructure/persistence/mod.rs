//! Local organization store implementations.
//!
//! # Repositories
//!
//! - [`MemoryOrgRepository`] - In-process store, optionally loaded from a JSON file

pub mod memory_org_repository;

pub use memory_org_repository::MemoryOrgRepository;
