//! Infrastructure layer for external integrations.
//!
//! This layer implements the outbound side of the lookup: talking to the
//! registry over HTTP and answering queries against the local store.
//!
//! # Modules
//!
//! - [`http`] - Transport abstraction, reqwest transport and the registry HTTP client
//! - [`persistence`] - Local organization store implementations

pub mod http;
pub mod persistence;
