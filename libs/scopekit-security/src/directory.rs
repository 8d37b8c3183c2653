use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::actor::ActorRole;

/// The record binding a subject to its organization.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Assignment {
    pub subject_id: Uuid,
    pub organization_id: Uuid,
    pub role: ActorRole,
}

/// Failure to reach or read the assignment store.
#[derive(Debug, thiserror::Error)]
#[error("assignment directory failure: {message}")]
pub struct DirectoryError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DirectoryError {
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

/// Lookup of organization assignments by subject.
#[async_trait]
pub trait AssignmentDirectory: Send + Sync {
    /// Returns the subject's assignment, or `None` when it has none.
    ///
    /// # Errors
    /// Returns `DirectoryError` when the backing store cannot be read.
    async fn find_assignment(&self, subject_id: Uuid) -> Result<Option<Assignment>, DirectoryError>;
}

/// In-memory directory for tests and demos.
#[derive(Default)]
pub struct StaticAssignmentDirectory {
    entries: RwLock<HashMap<Uuid, Assignment>>,
}

impl StaticAssignmentDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(self, subject_id: Uuid, organization_id: Uuid, role: ActorRole) -> Self {
        self.assign(subject_id, organization_id, role);
        self
    }

    /// Insert or replace the subject's assignment.
    pub fn assign(&self, subject_id: Uuid, organization_id: Uuid, role: ActorRole) {
        self.entries.write().insert(
            subject_id,
            Assignment {
                subject_id,
                organization_id,
                role,
            },
        );
    }

    pub fn revoke(&self, subject_id: Uuid) {
        self.entries.write().remove(&subject_id);
    }
}

#[async_trait]
impl AssignmentDirectory for StaticAssignmentDirectory {
    async fn find_assignment(&self, subject_id: Uuid) -> Result<Option<Assignment>, DirectoryError> {
        Ok(self.entries.read().get(&subject_id).cloned())
    }
}
