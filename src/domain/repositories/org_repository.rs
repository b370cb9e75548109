//! Repository trait for the local organization store.

use crate::domain::entities::LocalOrg;
use crate::error::StoreError;
use async_trait::async_trait;

/// Query contract of the local organization store.
///
/// Results are always ordered by name ascending.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryOrgRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrgRepository: Send + Sync {
    /// Finds organizations whose name or abbreviation contains `term`,
    /// ignoring case.
    ///
    /// # Arguments
    ///
    /// - `term` - Raw substring to look for (not a prefix)
    /// - `exclude_other` - If true, the placeholder "other" organization is skipped
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] if the store cannot be queried.
    async fn find_by_substring(
        &self,
        term: &str,
        exclude_other: bool,
    ) -> Result<Vec<LocalOrg>, StoreError>;

    /// Lists every organization.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] if the store cannot be queried.
    async fn list(&self, exclude_other: bool) -> Result<Vec<LocalOrg>, StoreError>;
}
