//! Local fallback search over the organization store.

use std::sync::Arc;

use crate::domain::entities::LocalOrg;
use crate::domain::repositories::OrgRepository;

/// Searches the local organization store when the registry cannot answer.
///
/// The placeholder "other" organization is always excluded. Store failures
/// are logged and produce an empty result; this search never fails.
pub struct LocalOrgSearch<R: OrgRepository> {
    repository: Arc<R>,
}

impl<R: OrgRepository> LocalOrgSearch<R> {
    /// Creates a new local search.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Finds organizations whose name or abbreviation contains `name`,
    /// ignoring case, ordered by name.
    ///
    /// A blank `name` returns every organization.
    pub async fn search(&self, name: &str) -> Vec<LocalOrg> {
        let result = if name.trim().is_empty() {
            self.repository.list(true).await
        } else {
            self.repository.find_by_substring(name, true).await
        };

        result.unwrap_or_else(|e| {
            tracing::error!(method = "local_org_search", error = %e, "Local organization search failed");
            Vec::new()
        })
    }
}
