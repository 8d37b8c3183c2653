use scopekit_security::ScopeResolutionError;

use crate::audit::AuditError;
use crate::repo::StorageError;

/// Everything a search can fail with.
///
/// None of these is ever turned into an empty result page.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error(transparent)]
    Scope(#[from] ScopeResolutionError),

    #[error("access denied: {0}")]
    Authorization(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Audit(#[from] AuditError),
}

impl SearchError {
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization(message.into())
    }
}
