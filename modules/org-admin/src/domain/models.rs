//! Result shapes returned to clients.
//!
//! Summaries never carry credentials. Timestamps are canonical RFC 3339 UTC
//! strings; absent references and timestamps serialize as `null`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub id: Uuid,
    pub number: String,
    pub status: String,
    pub memo: String,
    pub customer_id: Option<Uuid>,
    pub owner_id: Uuid,
    pub amount_cents: i64,
    pub currency: String,
    pub issued_at: String,
    pub paid_at: Option<String>,
    pub created_at: String,
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub manager_id: Option<Uuid>,
    pub last_login_at: Option<String>,
    pub created_at: String,
}
