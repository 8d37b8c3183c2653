use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Role an actor holds inside its organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    /// Sees organization rows, and only its own rows on owned resources.
    Member,
    /// Sees every row of its organization.
    Manager,
}

impl ActorRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ActorRole::Member => "member",
            ActorRole::Manager => "manager",
        }
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown actor role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for ActorRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("member") {
            Ok(ActorRole::Member)
        } else if s.eq_ignore_ascii_case("manager") {
            Ok(ActorRole::Manager)
        } else {
            Err(UnknownRole(s.to_owned()))
        }
    }
}

/// A caller bound to exactly one organization.
///
/// Only [`crate::ScopeResolver`] implementations construct these in
/// production code; the binding comes from the assignment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedActor {
    subject_id: Uuid,
    organization_id: Uuid,
    role: ActorRole,
}

impl ScopedActor {
    #[must_use]
    pub fn new(subject_id: Uuid, organization_id: Uuid, role: ActorRole) -> Self {
        Self {
            subject_id,
            organization_id,
            role,
        }
    }

    #[inline]
    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    #[inline]
    #[must_use]
    pub fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    #[inline]
    #[must_use]
    pub fn role(&self) -> ActorRole {
        self.role
    }

    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.role == ActorRole::Manager
    }
}
