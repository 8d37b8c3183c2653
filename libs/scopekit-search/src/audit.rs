//! Search audit trail.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether an audit failure fails the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditPolicy {
    /// Log the failure and return the results.
    #[default]
    BestEffort,
    /// Fail the request.
    Required,
}

/// One completed search.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AuditEvent {
    pub actor_id: Uuid,
    pub organization_id: Uuid,
    /// e.g. `invoices.search`
    pub action: String,
    /// The request as received, without the scope.
    pub filter: serde_json::Value,
    pub records: u64,
}

#[derive(Debug, thiserror::Error)]
#[error("audit sink failure: {0}")]
pub struct AuditError(pub String);

#[async_trait]
pub trait AuditSink: Send + Sync {
    /// # Errors
    /// Returns [`AuditError`] when the event could not be recorded.
    async fn record(&self, event: AuditEvent) -> Result<(), AuditError>;
}

/// Writes audit events to the `audit` tracing target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAuditSink;

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, event: AuditEvent) -> Result<(), AuditError> {
        tracing::info!(
            target: "audit",
            actor_id = %event.actor_id,
            organization_id = %event.organization_id,
            action = %event.action,
            filter = %event.filter,
            records = event.records,
            "search performed"
        );
        Ok(())
    }
}
