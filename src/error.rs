//! Error types shared across the lookup layers.
//!
//! None of these ever escape [`crate::application::services::RegistryService::search`]:
//! the HTTP client logs [`HttpError`] and yields no response, and the local
//! fallback logs [`StoreError`] and yields an empty list.

/// Failures of a single outbound HTTP exchange.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Invalid URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    #[error("Request to '{uri}' failed: {reason}")]
    Transport { uri: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl HttpError {
    pub fn invalid_uri(uri: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUri {
            uri: uri.into(),
            reason: reason.to_string(),
        }
    }

    pub fn transport(uri: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transport {
            uri: uri.into(),
            reason: reason.to_string(),
        }
    }
}

/// Failures of the local organization store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read organization store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse organization store: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Organization query failed: {0}")]
    Query(String),
}
