//! Storage port used by the search engine.

use async_trait::async_trait;

use crate::field::SearchField;
use crate::predicate::Predicate;
use crate::sort::Sort;

/// Opaque storage failure. The message is for logs, not for clients.
#[derive(Debug, thiserror::Error)]
#[error("storage failure: {message}")]
pub struct StorageError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    #[must_use]
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

/// Executes predicates against one resource.
///
/// `count` and `fetch_page` receive the same predicate and must apply it
/// identically; the engine runs them concurrently.
#[async_trait]
pub trait SearchRepository: Send + Sync {
    type Field: SearchField;
    type Row: Send;

    /// Number of rows matching `predicate`, ignoring any window.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend fails.
    async fn count(&self, predicate: &Predicate<Self::Field>) -> Result<u64, StorageError>;

    /// At most `limit` rows matching `predicate`, ordered by `order`,
    /// skipping the first `offset`. Both `offset` and `limit` fit in an `i64`.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend fails.
    async fn fetch_page(
        &self,
        predicate: &Predicate<Self::Field>,
        order: &[Sort<Self::Field>],
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self::Row>, StorageError>;
}
