use serde::{Deserialize, Serialize};

use crate::audit::AuditPolicy;
use crate::pagination::{EmptyPages, InvalidPaging, PageNumbering, PagingPolicy};

/// Per-resource search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Page size used when the request has none (or a non-positive one).
    pub default_limit: u64,
    /// Upper bound for the page size.
    pub max_limit: u64,
    pub page_numbering: PageNumbering,
    pub invalid_paging: InvalidPaging,
    pub empty_pages: EmptyPages,
    pub audit: AuditPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
            page_numbering: PageNumbering::default(),
            invalid_paging: InvalidPaging::default(),
            empty_pages: EmptyPages::default(),
            audit: AuditPolicy::default(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn paging_policy(&self) -> PagingPolicy {
        PagingPolicy {
            numbering: self.page_numbering,
            invalid: self.invalid_paging,
            empty_pages: self.empty_pages,
            default_limit: self.default_limit,
            max_limit: self.max_limit,
        }
    }
}
