//! Registry HTTP client: standard headers, bounded redirects, failure logging.

use reqwest::header::{ACCEPT, ACCEPT_ENCODING, CONTENT_TYPE, HOST, HeaderMap, HeaderValue, USER_AGENT};
use std::sync::Arc;
use url::Url;

use super::transport::{HttpResponse, HttpTransport};
use crate::config::RegistryConfig;
use crate::error::HttpError;

/// Longest body excerpt included when logging a failed response.
const MAX_LOGGED_BODY: usize = 512;

/// GET-only HTTP client for the registry.
///
/// Never returns an error: transport failures are logged and reported as
/// `None`, so callers only ever branch on "no response" or a status code.
#[derive(Clone)]
pub struct RegistryHttpClient {
    config: Arc<RegistryConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl RegistryHttpClient {
    /// Creates a new client.
    pub fn new(config: Arc<RegistryConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The standard headers sent with every request.
    ///
    /// `Host` is the hostname of the registry base URL and `User-Agent` is
    /// `"<app name> (<contact email>)"`. Values that are not valid header
    /// text are left out.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));

        if let Some(host) = self.config.host()
            && let Ok(value) = HeaderValue::from_str(&host)
        {
            headers.insert(HOST, value);
        }

        match HeaderValue::from_str(&self.config.user_agent()) {
            Ok(value) => {
                headers.insert(USER_AGENT, value);
            }
            Err(e) => {
                tracing::warn!(error = %e, "User-Agent is not a valid header value, omitting it");
            }
        }

        headers
    }

    /// Sends a GET to `uri`, following redirects up to the configured limit.
    ///
    /// `additional_headers` are applied on top of [`Self::headers`] and replace
    /// standard headers with the same name.
    ///
    /// Returns `None` without sending anything if `uri` is blank, and `None`
    /// after logging if the transport fails.
    pub async fn get(&self, uri: &str, additional_headers: &HeaderMap) -> Option<HttpResponse> {
        self.get_with_redirects(uri, additional_headers.clone(), 0)
            .await
    }

    /// Sends a GET to `uri`, with `redirects_so_far` hops already taken.
    ///
    /// Each 3xx response with a `Location` is followed while
    /// `redirects_so_far < max_redirects`; follow-up requests carry only the
    /// standard headers. Once the limit is reached the redirect response is
    /// returned unfollowed (see [`HttpResponse::is_redirect`]).
    ///
    /// Every hop sends the standard headers, including `Host` set to the
    /// registry base URL's host, even when `Location` points at another host.
    pub async fn get_with_redirects(
        &self,
        uri: &str,
        additional_headers: HeaderMap,
        redirects_so_far: u32,
    ) -> Option<HttpResponse> {
        if uri.trim().is_empty() {
            tracing::debug!("Skipping HTTP GET: no URI given");
            return None;
        }

        let mut url = match Url::parse(uri.trim()) {
            Ok(url) => url,
            Err(e) => {
                log_error("http_get", &HttpError::invalid_uri(uri, e));
                return None;
            }
        };
        let mut extra = additional_headers;
        let mut redirects = redirects_so_far;

        loop {
            let mut headers = self.headers();
            headers.extend(extra);

            let response = match self.transport.get(&url, &headers).await {
                Ok(response) => response,
                Err(e) => {
                    log_error("http_get", &e);
                    return None;
                }
            };

            if !response.is_redirect() {
                return Some(response);
            }

            if redirects >= self.config.max_redirects {
                tracing::warn!(
                    uri = %url,
                    status = response.status.as_u16(),
                    max_redirects = self.config.max_redirects,
                    "Redirect limit reached, returning redirect response unfollowed"
                );
                return Some(response);
            }

            let next = response.location().and_then(|loc| url.join(loc).ok());
            let Some(next) = next else {
                tracing::warn!(
                    uri = %url,
                    status = response.status.as_u16(),
                    "Redirect without a usable Location header"
                );
                return Some(response);
            };

            redirects += 1;
            tracing::debug!(from = %url, to = %next, redirects, "Following redirect");

            url = next;
            extra = HeaderMap::new();
        }
    }
}

/// Logs an error raised while serving `method`.
pub fn log_error(method: &str, error: &dyn std::fmt::Display) {
    tracing::error!(method, error = %error, "Registry request failed");
}

/// Logs a non-2xx registry response for `method`.
pub fn handle_http_failure(method: &str, response: &HttpResponse) {
    let excerpt: String = response.body.chars().take(MAX_LOGGED_BODY).collect();
    tracing::error!(
        method,
        status = response.status.as_u16(),
        body = %excerpt,
        "Registry returned an unexpected response"
    );
}
