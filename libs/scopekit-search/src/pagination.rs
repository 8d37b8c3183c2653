//! Page window normalization and pagination metadata.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Index of the first page as seen by clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageNumbering {
    #[default]
    OneBased,
    ZeroBased,
}

impl PageNumbering {
    #[must_use]
    pub fn first_page(self) -> i64 {
        match self {
            PageNumbering::OneBased => 1,
            PageNumbering::ZeroBased => 0,
        }
    }
}

/// What to do with an out-of-range page or limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidPaging {
    /// Replace with the first page / default limit, clamp to the maximum.
    #[default]
    Normalize,
    /// Fail with a validation error.
    Reject,
}

/// `pages` reported for an empty result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPages {
    #[default]
    Zero,
    AtLeastOne,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagingPolicy {
    pub numbering: PageNumbering,
    pub invalid: InvalidPaging,
    pub empty_pages: EmptyPages,
    pub default_limit: u64,
    pub max_limit: u64,
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self {
            numbering: PageNumbering::default(),
            invalid: InvalidPaging::default(),
            empty_pages: EmptyPages::default(),
            default_limit: 20,
            max_limit: 100,
        }
    }
}

/// Upper bound for `limit` and `offset`; SQL drivers bind both as signed 64-bit.
const MAX_WINDOW: u64 = i64::MAX.unsigned_abs();

/// A validated page request: client page number, limit and row offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub limit: u64,
    pub offset: u64,
}

impl PagingPolicy {
    fn effective_default(&self) -> u64 {
        self.default_limit.clamp(1, MAX_WINDOW)
    }

    fn effective_max(&self) -> u64 {
        self.max_limit.clamp(self.effective_default(), MAX_WINDOW)
    }

    /// Turns raw client input into a [`PageWindow`].
    ///
    /// # Errors
    /// Returns [`SearchError::Validation`] when the policy is
    /// [`InvalidPaging::Reject`] and the input is out of range.
    pub fn normalize(&self, page: Option<i64>, limit: Option<i64>) -> Result<PageWindow, SearchError> {
        let first = self.numbering.first_page();
        let reject = self.invalid == InvalidPaging::Reject;

        let page = match page {
            None => first,
            Some(p) if p >= first => p,
            Some(_) if reject => {
                return Err(SearchError::validation("page", format!("must be >= {first}")));
            }
            Some(_) => first,
        };

        let max = self.effective_max();
        let limit = match limit {
            None => self.effective_default(),
            Some(l) if l <= 0 => {
                if reject {
                    return Err(SearchError::validation("limit", "must be positive"));
                }
                self.effective_default()
            }
            Some(l) => {
                let l = u64::try_from(l).unwrap_or(max);
                if l > max {
                    if reject {
                        return Err(SearchError::validation("limit", format!("must be <= {max}")));
                    }
                    max
                } else {
                    l
                }
            }
        };

        // page >= first >= 0 here
        let page = u64::try_from(page).unwrap_or_default();
        let index = page.saturating_sub(u64::try_from(first).unwrap_or_default());
        Ok(PageWindow {
            page,
            limit,
            offset: index.saturating_mul(limit).min(MAX_WINDOW),
        })
    }

    /// Normalizes the input and computes metadata for `records` rows.
    ///
    /// # Errors
    /// Same as [`PagingPolicy::normalize`].
    pub fn compute(&self, page: Option<i64>, limit: Option<i64>, records: u64) -> Result<Pagination, SearchError> {
        let window = self.normalize(page, limit)?;
        Ok(Pagination::from_window(&window, records, self.empty_pages))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: u64,
    pub limit: u64,
    pub records: u64,
    pub pages: u64,
}

impl Pagination {
    #[must_use]
    pub fn from_window(window: &PageWindow, records: u64, empty: EmptyPages) -> Self {
        let limit = window.limit.max(1);
        let pages = records.div_ceil(limit);
        let pages = match empty {
            EmptyPages::Zero => pages,
            EmptyPages::AtLeastOne => pages.max(1),
        };
        Self {
            current: window.page,
            limit,
            records,
            pages,
        }
    }
}
