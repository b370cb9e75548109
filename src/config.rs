//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then shared
//! read-only (via `Arc`) with the HTTP client and the search service.
//!
//! ## Registry Variables
//!
//! ```bash
//! export REGISTRY_BASE_URL="https://api.ror.org/"
//! export REGISTRY_HEARTBEAT_PATH="heartbeat"
//! export REGISTRY_SEARCH_PATH="organizations"
//! export REGISTRY_MAX_PAGES="5"
//! export REGISTRY_MAX_RESULTS_PER_PAGE="20"
//! export REGISTRY_MAX_REDIRECTS="3"
//! export REGISTRY_TIMEOUT_SECONDS="10"
//! ```
//!
//! ## Required Variables
//!
//! - `APP_NAME` - Application name sent in the `User-Agent` header
//! - `APP_EMAIL` - Contact address sent in the `User-Agent` header
//!
//! ## Optional Variables
//!
//! - `LOCAL_ORGS_PATH` - JSON file backing the local fallback store
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://api.ror.org/";
const DEFAULT_HEARTBEAT_PATH: &str = "heartbeat";
const DEFAULT_SEARCH_PATH: &str = "organizations";

/// Settings for talking to the organization registry.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub base_url: String,
    pub heartbeat_path: String,
    pub search_path: String,
    /// Hard ceiling on result pages fetched per search.
    pub max_pages: u64,
    /// Page size the registry uses; drives the page-count arithmetic.
    pub max_results_per_page: u64,
    /// Redirect hops followed before the 3xx response is handed back as-is.
    pub max_redirects: u32,
    /// Connect and read timeout for each request, in seconds.
    pub timeout_seconds: u64,
    pub app_name: String,
    pub app_email: String,
}

impl RegistryConfig {
    /// Loads registry settings from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `APP_NAME` or `APP_EMAIL` is missing.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("REGISTRY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let heartbeat_path = env::var("REGISTRY_HEARTBEAT_PATH")
            .unwrap_or_else(|_| DEFAULT_HEARTBEAT_PATH.to_string());
        let search_path =
            env::var("REGISTRY_SEARCH_PATH").unwrap_or_else(|_| DEFAULT_SEARCH_PATH.to_string());

        let max_pages = env::var("REGISTRY_MAX_PAGES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let max_results_per_page = env::var("REGISTRY_MAX_RESULTS_PER_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        let max_redirects = env::var("REGISTRY_MAX_REDIRECTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let timeout_seconds = env::var("REGISTRY_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let app_name = env::var("APP_NAME").context("APP_NAME must be set")?;
        let app_email = env::var("APP_EMAIL").context("APP_EMAIL must be set")?;

        Ok(Self {
            base_url,
            heartbeat_path,
            search_path,
            max_pages,
            max_results_per_page,
            max_redirects,
            timeout_seconds,
            app_name,
            app_email,
        })
    }

    /// Validates the registry settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an absolute `http`/`https` URL with a host
    /// - `search_path` is empty
    /// - `max_pages`, `max_results_per_page` or `timeout_seconds` is zero
    /// - `app_name` or `app_email` is blank
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.base_url)
            .with_context(|| format!("REGISTRY_BASE_URL is not a valid URL: '{}'", self.base_url))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!(
                "REGISTRY_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if parsed.host_str().is_none() {
            anyhow::bail!("REGISTRY_BASE_URL must include a host, got '{}'", self.base_url);
        }

        if self.search_path.trim().is_empty() {
            anyhow::bail!("REGISTRY_SEARCH_PATH must not be empty");
        }

        if self.max_pages == 0 {
            anyhow::bail!("REGISTRY_MAX_PAGES must be at least 1");
        }

        if self.max_results_per_page == 0 {
            anyhow::bail!("REGISTRY_MAX_RESULTS_PER_PAGE must be at least 1");
        }

        if self.timeout_seconds == 0 {
            anyhow::bail!("REGISTRY_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.app_name.trim().is_empty() {
            anyhow::bail!("APP_NAME must not be empty");
        }

        if self.app_email.trim().is_empty() {
            anyhow::bail!("APP_EMAIL must not be empty");
        }

        Ok(())
    }

    /// Full URL of the heartbeat endpoint.
    pub fn heartbeat_url(&self) -> String {
        format!("{}{}", self.base_url, self.heartbeat_path)
    }

    /// Full URL of the search endpoint, without query parameters.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, self.search_path)
    }

    /// Hostname of `base_url`, used for the `Host` header.
    pub fn host(&self) -> Option<String> {
        Url::parse(&self.base_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
    }

    /// Value sent in the `User-Agent` header.
    pub fn user_agent(&self) -> String {
        format!("{} ({})", self.app_name, self.app_email)
    }
}

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub registry: RegistryConfig,
    pub local_orgs_path: Option<PathBuf>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required registry configuration is missing.
    pub fn from_env() -> Result<Self> {
        let registry =
            RegistryConfig::from_env().context("Failed to load registry configuration")?;

        let local_orgs_path = env::var("LOCAL_ORGS_PATH").ok().map(PathBuf::from);
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            registry,
            local_orgs_path,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry settings are invalid or `log_format`
    /// is not `text` or `json`.
    pub fn validate(&self) -> Result<()> {
        self.registry.validate()?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Registry: {}", self.registry.base_url);
        tracing::info!("  Heartbeat: {}", self.registry.heartbeat_url());
        tracing::info!("  Search: {}", self.registry.search_url());
        tracing::info!(
            "  Paging: {} pages x {} results",
            self.registry.max_pages,
            self.registry.max_results_per_page
        );
        tracing::info!("  Max redirects: {}", self.registry.max_redirects);
        tracing::info!("  Timeout: {}s", self.registry.timeout_seconds);
        tracing::info!("  User-Agent: {}", self.registry.user_agent());

        match self.local_orgs_path {
            Some(ref path) => tracing::info!("  Local store: {}", path.display()),
            None => tracing::info!("  Local store: empty"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
