use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use scopekit_security::{ActorRole, Assignment, AssignmentDirectory, DirectoryError};

use crate::infra::storage::entity::org_assignment;

/// Reads organization assignments from the `org_assignments` table.
#[derive(Clone)]
pub struct SeaAssignmentDirectory {
    db: DatabaseConnection,
}

impl SeaAssignmentDirectory {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AssignmentDirectory for SeaAssignmentDirectory {
    async fn find_assignment(&self, subject_id: Uuid) -> Result<Option<Assignment>, DirectoryError> {
        let Some(row) = org_assignment::Entity::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(DirectoryError::new)?
        else {
            return Ok(None);
        };

        let role: ActorRole = row.role.parse().map_err(DirectoryError::new)?;
        Ok(Some(Assignment {
            subject_id: row.subject_id,
            organization_id: row.organization_id,
            role,
        }))
    }
}
