use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// One page of mapped results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultPage<T> {
    pub pagination: Pagination,
    pub data: Vec<T>,
}

impl<T> ResultPage<T> {
    #[must_use]
    pub fn new(pagination: Pagination, data: Vec<T>) -> Self {
        Self { pagination, data }
    }
}
