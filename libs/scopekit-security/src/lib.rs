#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod actor;
pub mod context;
pub mod directory;
pub mod resolver;

pub use actor::{ActorRole, ScopedActor};
pub use context::SecurityContext;
pub use directory::{Assignment, AssignmentDirectory, DirectoryError, StaticAssignmentDirectory};
pub use resolver::{DirectoryScopeResolver, ScopeResolutionError, ScopeResolver};
