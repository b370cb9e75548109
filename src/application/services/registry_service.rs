//! Organization search against the registry, with local fallback.

use reqwest::header::HeaderMap;
use std::sync::Arc;
use url::Url;

use super::local_search::LocalOrgSearch;
use super::ranking::rank;
use crate::domain::entities::{OrgMatches, RegistryPage, SearchResult};
use crate::domain::repositories::OrgRepository;
use crate::infrastructure::http::{RegistryHttpClient, handle_http_failure, log_error};

/// Outcome of fetching one registry result page.
#[derive(Debug)]
pub enum PageFetch {
    /// The page decoded, or the registry did not answer with 2xx (empty page).
    Page(RegistryPage),
    /// The registry answered 2xx with a body that is not a valid page.
    ParseError(serde_json::Error),
}

/// Resolves free-text organization names through the registry.
///
/// Each search runs its requests one after another: heartbeat, page 1, then
/// pages 2..N in order. Nothing is cached between searches.
///
/// # Fallback
///
/// - Registry heartbeat not 2xx: answer from the local store
/// - Page 1 body not valid JSON: answer from the local store
/// - Later page body not valid JSON: return what was gathered so far
pub struct RegistryService<R: OrgRepository> {
    client: RegistryHttpClient,
    local: LocalOrgSearch<R>,
}

impl<R: OrgRepository> RegistryService<R> {
    /// Creates a new registry service.
    pub fn new(client: RegistryHttpClient, repository: Arc<R>) -> Self {
        Self {
            client,
            local: LocalOrgSearch::new(repository),
        }
    }

    /// Returns true if the registry heartbeat answers with a 2xx status.
    pub async fn ping(&self) -> bool {
        let heartbeat = self.client.config().heartbeat_url();

        match self.client.get(&heartbeat, &HeaderMap::new()).await {
            Some(response) if response.is_success() => true,
            Some(response) => {
                handle_http_failure("ping", &response);
                false
            }
            None => false,
        }
    }

    /// Searches for organizations matching `name`.
    ///
    /// Returns an empty result for a blank `name` without any network call.
    /// Registry results are disambiguated and ranked by relevance; local
    /// fallback results keep store order.
    pub async fn search(&self, name: &str) -> OrgMatches {
        if name.trim().is_empty() {
            return OrgMatches::empty();
        }

        if !self.ping().await {
            tracing::warn!(name, "Registry unavailable, falling back to local search");
            return OrgMatches::Local(self.local.search(name).await);
        }

        let first = match self.fetch_page(name, 1).await {
            PageFetch::Page(page) => page,
            PageFetch::ParseError(e) => {
                log_error("search", &e);
                return OrgMatches::Local(self.local.search(name).await);
            }
        };

        let results = self.process_pages(name, first).await;
        OrgMatches::Registry(rank(results, name))
    }

    /// Searches only the local store.
    pub async fn local_search(&self, name: &str) -> OrgMatches {
        OrgMatches::Local(self.local.search(name).await)
    }

    /// Gathers results from `first` and any further pages, up to `max_pages`.
    ///
    /// A later page that fails to parse stops pagination; results from the
    /// pages before it are kept.
    async fn process_pages(&self, name: &str, first: RegistryPage) -> Vec<SearchResult> {
        let config = self.client.config();
        let pages = first.number_of_results.div_ceil(config.max_results_per_page);
        let mut results = first.into_results();

        if pages <= 1 {
            return results;
        }

        let last_page = pages.min(config.max_pages);
        tracing::debug!(name, pages, last_page, "Fetching additional registry pages");

        for page in 2..=last_page {
            match self.fetch_page(name, page).await {
                PageFetch::Page(page) => results.extend(page.into_results()),
                PageFetch::ParseError(e) => {
                    log_error("search", &e);
                    break;
                }
            }
        }

        results
    }

    /// Fetches and decodes one page of registry results for `name`.
    ///
    /// A missing or non-2xx response yields an empty page.
    pub async fn fetch_page(&self, name: &str, page: u64) -> PageFetch {
        let Some(uri) = self.page_url(name, page) else {
            return PageFetch::Page(RegistryPage::empty());
        };

        let Some(response) = self.client.get(&uri, &HeaderMap::new()).await else {
            return PageFetch::Page(RegistryPage::empty());
        };

        if !response.is_success() {
            handle_http_failure("search", &response);
            return PageFetch::Page(RegistryPage::empty());
        }

        match serde_json::from_str(&response.body) {
            Ok(page) => PageFetch::Page(page),
            Err(e) => PageFetch::ParseError(e),
        }
    }

    fn page_url(&self, name: &str, page: u64) -> Option<String> {
        let search_url = self.client.config().search_url();

        match Url::parse_with_params(
            &search_url,
            &[("query", name.to_string()), ("page", page.to_string())],
        ) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                log_error("search", &e);
                None
            }
        }
    }
}
