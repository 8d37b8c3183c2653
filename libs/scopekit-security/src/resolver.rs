use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::actor::ScopedActor;
use crate::context::SecurityContext;
use crate::directory::{AssignmentDirectory, DirectoryError};

/// Why a caller could not be bound to an organization.
///
/// Every variant is fatal for the request: an unresolvable scope must never
/// degrade into an empty result.
#[derive(Debug, thiserror::Error)]
pub enum ScopeResolutionError {
    #[error("request is not authenticated")]
    Unauthenticated,

    #[error("subject {subject_id} has no organization assignment")]
    MissingBinding { subject_id: Uuid },

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Turns an authenticated context into a [`ScopedActor`].
#[async_trait]
pub trait ScopeResolver: Send + Sync {
    /// # Errors
    /// See [`ScopeResolutionError`].
    async fn resolve(&self, ctx: &SecurityContext) -> Result<ScopedActor, ScopeResolutionError>;
}

/// Resolves actors from their assignment records.
pub struct DirectoryScopeResolver {
    directory: Arc<dyn AssignmentDirectory>,
}

impl DirectoryScopeResolver {
    #[must_use]
    pub fn new(directory: Arc<dyn AssignmentDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl ScopeResolver for DirectoryScopeResolver {
    async fn resolve(&self, ctx: &SecurityContext) -> Result<ScopedActor, ScopeResolutionError> {
        let subject_id = ctx
            .subject_id()
            .ok_or(ScopeResolutionError::Unauthenticated)?;

        let Some(assignment) = self.directory.find_assignment(subject_id).await? else {
            tracing::warn!(%subject_id, "subject has no organization assignment");
            return Err(ScopeResolutionError::MissingBinding { subject_id });
        };

        Ok(ScopedActor::new(
            subject_id,
            assignment.organization_id,
            assignment.role,
        ))
    }
}
