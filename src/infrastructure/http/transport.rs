//! Transport trait and response type.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, LOCATION};
use url::Url;

use crate::error::HttpError;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with no headers. Meant for test transports.
    ///
    /// Status codes outside `100..=999` are mapped to `500 Internal Server Error`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Creates a `302 Found` response pointing at `location`. Meant for test
    /// transports; a `location` that is not valid header text is left out.
    pub fn redirect(location: &str) -> Self {
        let mut response = Self::new(302, "");
        if let Ok(value) = HeaderValue::from_str(location) {
            response.headers.insert(LOCATION, value);
        }
        response
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// True for 3xx responses.
    ///
    /// The client hands back an unfollowed redirect once the redirect limit is
    /// reached, so callers seeing this should treat the exchange as failed.
    pub fn is_redirect(&self) -> bool {
        self.status.is_redirection()
    }

    /// Value of the `Location` header, if present and valid UTF-8.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
    }
}

/// Executes a single GET request.
///
/// Implementations must not follow redirects; 3xx responses are returned to
/// [`super::RegistryHttpClient`], which owns the redirect policy.
///
/// # Implementations
///
/// - [`super::ReqwestTransport`] - Production transport
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a GET to `url` with exactly the given headers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] on connection, timeout, TLS or body
    /// read failures.
    async fn get(&self, url: &Url, headers: &HeaderMap) -> Result<HttpResponse, HttpError>;
}
