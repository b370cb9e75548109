//! Search outcome tagged by the source that produced it.

use serde::Serialize;

use crate::domain::entities::{LocalOrg, SearchResult};

/// Organizations matching a search.
///
/// `Registry` results come from the remote registry and are ranked by
/// relevance. `Local` results come from the fallback store, in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "results", rename_all = "snake_case")]
pub enum OrgMatches {
    Registry(Vec<SearchResult>),
    Local(Vec<LocalOrg>),
}

impl OrgMatches {
    /// An empty registry result, returned for blank queries.
    pub fn empty() -> Self {
        Self::Registry(Vec::new())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Registry(results) => results.len(),
            Self::Local(orgs) => orgs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    /// Display names in result order, regardless of source.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Registry(results) => results.iter().map(|r| r.name.as_str()).collect(),
            Self::Local(orgs) => orgs.iter().map(|o| o.name.as_str()).collect(),
        }
    }
}
