//! reqwest-backed HTTP transport.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use std::time::Duration;
use url::Url;

use super::transport::{HttpResponse, HttpTransport};
use crate::config::RegistryConfig;
use crate::error::HttpError;

/// Production transport built on a shared `reqwest::Client`.
///
/// Automatic redirects are disabled and gzip bodies are decoded transparently.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport whose connect and read phases are bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a transport using the configured timeout.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &RegistryConfig) -> Result<Self, HttpError> {
        Self::new(Duration::from_secs(config.timeout_seconds))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url, headers: &HeaderMap) -> Result<HttpResponse, HttpError> {
        let response = self
            .client
            .get(url.clone())
            .headers(headers.clone())
            .send()
            .await
            .map_err(|e| HttpError::transport(url.as_str(), e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::transport(url.as_str(), e))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
