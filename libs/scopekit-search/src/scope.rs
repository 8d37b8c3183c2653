//! Tenant and ownership scoping.
//!
//! A [`ScopeClause`] is derived from the resolved actor only. Request bodies
//! never contribute to it; a client-supplied organization id is checked by
//! [`ScopeEnforcer::guard_requested_organization`] and then ignored.

use serde::Serialize;
use uuid::Uuid;

use scopekit_security::ScopedActor;

use crate::error::SearchError;

/// How a resource restricts rows beyond the organization boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ownership {
    /// Every actor of the organization sees every row.
    #[default]
    Shared,
    /// Members only see rows they own; managers see the whole organization.
    Owned,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScopeClause {
    organization_id: Uuid,
    owner_id: Option<Uuid>,
    include_deleted: bool,
}

impl ScopeClause {
    #[must_use]
    pub fn new(organization_id: Uuid, owner_id: Option<Uuid>, include_deleted: bool) -> Self {
        Self {
            organization_id,
            owner_id,
            include_deleted,
        }
    }

    #[must_use]
    pub fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    #[must_use]
    pub fn owner_id(&self) -> Option<Uuid> {
        self.owner_id
    }

    #[must_use]
    pub fn include_deleted(&self) -> bool {
        self.include_deleted
    }

    /// In-memory evaluation of the clause against a row's scope columns.
    #[must_use]
    pub fn admits(&self, organization_id: Uuid, owner_id: Option<Uuid>, deleted: bool) -> bool {
        if organization_id != self.organization_id {
            return false;
        }
        if let Some(required) = self.owner_id
            && owner_id != Some(required)
        {
            return false;
        }
        self.include_deleted || !deleted
    }
}

pub struct ScopeEnforcer;

impl ScopeEnforcer {
    /// Builds the mandatory clause for `actor`.
    ///
    /// Owned resources are narrowed to the actor's own rows unless the actor
    /// is a manager.
    #[must_use]
    pub fn scope(actor: &ScopedActor, ownership: Ownership, include_deleted: bool) -> ScopeClause {
        let owner_id = match ownership {
            Ownership::Owned if !actor.is_manager() => Some(actor.subject_id()),
            Ownership::Owned | Ownership::Shared => None,
        };
        ScopeClause::new(actor.organization_id(), owner_id, include_deleted)
    }

    /// Rejects requests that explicitly target an organization other than
    /// the actor's own.
    ///
    /// # Errors
    /// Returns [`SearchError::Authorization`] on a mismatch.
    pub fn guard_requested_organization(
        actor: &ScopedActor,
        requested: Option<Uuid>,
    ) -> Result<(), SearchError> {
        match requested {
            Some(org) if org != actor.organization_id() => {
                tracing::warn!(
                    subject_id = %actor.subject_id(),
                    requested = %org,
                    "search targeted a foreign organization"
                );
                Err(SearchError::authorization(
                    "requested organization is outside the caller's scope",
                ))
            }
            _ => Ok(()),
        }
    }
}
