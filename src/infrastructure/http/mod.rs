//! Outbound HTTP for the registry.
//!
//! Provides an [`HttpTransport`] trait that performs exactly one GET, with one
//! production implementation:
//! - [`ReqwestTransport`] - reqwest-backed transport with redirects disabled
//!
//! [`RegistryHttpClient`] sits on top of any transport and adds the standard
//! headers, bounded redirect following and failure logging.

mod client;
mod reqwest_transport;
mod transport;

pub use client::{RegistryHttpClient, handle_http_failure, log_error};
pub use reqwest_transport::ReqwestTransport;
pub use transport::{HttpResponse, HttpTransport};

#[cfg(test)]
pub use transport::MockHttpTransport;
