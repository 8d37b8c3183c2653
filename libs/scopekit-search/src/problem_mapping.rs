//! [`SearchError`] to [`Problem`] conversion.
//!
//! Internal failures keep their cause in the logs only; the problem detail
//! stays generic.

use scopekit_errors::{ErrDef, Problem};
use scopekit_security::ScopeResolutionError;

use crate::error::SearchError;

pub const INVALID_REQUEST: ErrDef = ErrDef {
    status: 422,
    title: "Invalid Search Request",
    code: "search.invalid_request",
    type_url: "https://errors.scopekit.dev/search/invalid_request",
};

pub const UNAUTHENTICATED: ErrDef = ErrDef {
    status: 401,
    title: "Unauthenticated",
    code: "search.unauthenticated",
    type_url: "https://errors.scopekit.dev/search/unauthenticated",
};

pub const NO_SCOPE: ErrDef = ErrDef {
    status: 403,
    title: "No Organization Scope",
    code: "search.no_scope",
    type_url: "https://errors.scopekit.dev/search/no_scope",
};

pub const FORBIDDEN_SCOPE: ErrDef = ErrDef {
    status: 403,
    title: "Forbidden Scope",
    code: "search.forbidden_scope",
    type_url: "https://errors.scopekit.dev/search/forbidden_scope",
};

pub const INTERNAL: ErrDef = ErrDef {
    status: 500,
    title: "Internal Server Error",
    code: "search.internal",
    type_url: "https://errors.scopekit.dev/search/internal",
};

impl From<SearchError> for Problem {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Validation { field, message } => INVALID_REQUEST
                .as_problem(format!("invalid {field}"))
                .with_violation(field, message),
            SearchError::Scope(ScopeResolutionError::Unauthenticated) => {
                UNAUTHENTICATED.as_problem("authentication is required")
            }
            SearchError::Scope(ScopeResolutionError::MissingBinding { .. }) => {
                NO_SCOPE.as_problem("caller is not assigned to an organization")
            }
            SearchError::Scope(ScopeResolutionError::Directory(e)) => {
                tracing::error!(error = %e, "assignment directory failure");
                INTERNAL.as_problem("an internal error occurred")
            }
            SearchError::Authorization(msg) => FORBIDDEN_SCOPE.as_problem(msg),
            SearchError::Storage(e) => {
                tracing::error!(error = %e, "search storage failure");
                INTERNAL.as_problem("an internal error occurred")
            }
            SearchError::Audit(e) => {
                tracing::error!(error = %e, "required audit failed");
                INTERNAL.as_problem("an internal error occurred")
            }
        }
    }
}
