//! In-memory implementation of the organization repository.

use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::LocalOrg;
use crate::domain::repositories::OrgRepository;
use crate::error::StoreError;

/// Organization store held in memory.
///
/// Records are sorted by name, ignoring case, once at construction, so every query returns
/// them in name order. The store is read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrgRepository {
    orgs: Vec<LocalOrg>,
}

impl MemoryOrgRepository {
    /// Creates a repository from the given records.
    pub fn new(mut orgs: Vec<LocalOrg>) -> Self {
        orgs.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        Self { orgs }
    }

    /// Loads records from a JSON array of `{ name, abbreviation, is_other }`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read and
    /// [`StoreError::Parse`] if it is not a valid record array.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Parses records from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] if `raw` is not a valid record array.
    pub fn from_json_str(raw: &str) -> Result<Self, StoreError> {
        let orgs: Vec<LocalOrg> = serde_json::from_str(raw)?;
        Ok(Self::new(orgs))
    }

    pub fn len(&self) -> usize {
        self.orgs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orgs.is_empty()
    }

    fn visible(&self, exclude_other: bool) -> impl Iterator<Item = &LocalOrg> {
        self.orgs
            .iter()
            .filter(move |org| !(exclude_other && org.is_other))
    }
}

#[async_trait]
impl OrgRepository for MemoryOrgRepository {
    async fn find_by_substring(
        &self,
        term: &str,
        exclude_other: bool,
    ) -> Result<Vec<LocalOrg>, StoreError> {
        let term = term.to_lowercase();

        Ok(self
            .visible(exclude_other)
            .filter(|org| org.matches_lowercase(&term))
            .cloned()
            .collect())
    }

    async fn list(&self, exclude_other: bool) -> Result<Vec<LocalOrg>, StoreError> {
        Ok(self.visible(exclude_other).cloned().collect())
    }
}
