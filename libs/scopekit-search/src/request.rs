//! Incoming search requests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field::SearchField;
use crate::predicate::PredicateBuilder;

/// Resource-specific filter input.
pub trait SearchFilters: Serialize + Send + Sync {
    type Field: SearchField;

    /// Adds one clause per present filter.
    fn apply(&self, builder: &mut PredicateBuilder<Self::Field>);

    /// Organization the client explicitly asked for, if the filter has such a
    /// key. Only used to reject cross-tenant requests.
    fn requested_organization(&self) -> Option<Uuid> {
        None
    }
}

/// Filters plus the paging and sorting envelope.
///
/// Both `sort` and the `order_by` / `order_direction` pair are accepted; a
/// non-blank `sort` wins.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchRequest<Q> {
    #[serde(flatten)]
    pub filters: Q,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(default, alias = "page_size", alias = "pageSize", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(default, alias = "orderBy", skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    #[serde(default, alias = "orderDirection", skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub include_deleted: bool,
}

impl<Q> SearchRequest<Q> {
    #[must_use]
    pub fn new(filters: Q) -> Self {
        Self {
            filters,
            page: None,
            limit: None,
            sort: None,
            order_by: None,
            order_direction: None,
            include_deleted: false,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, token: impl Into<String>) -> Self {
        self.sort = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_order(mut self, order_by: impl Into<String>, direction: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self.order_direction = Some(direction.into());
        self
    }

    #[must_use]
    pub fn including_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }

    pub(crate) fn sort_token(&self) -> Option<&str> {
        self.sort.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}
