use scopekit_search::{canonical, canonical_opt};

use crate::domain::models::{InvoiceSummary, MemberSummary};
use crate::infra::storage::entity::{invoice, member};

impl From<invoice::Model> for InvoiceSummary {
    fn from(m: invoice::Model) -> Self {
        Self {
            id: m.id,
            number: m.number,
            status: m.status,
            memo: m.memo,
            customer_id: m.customer_id,
            owner_id: m.owner_id,
            amount_cents: m.amount_cents,
            currency: m.currency,
            issued_at: canonical(&m.issued_at),
            paid_at: canonical_opt(m.paid_at.as_ref()),
            created_at: canonical(&m.created_at),
            deleted_at: canonical_opt(m.deleted_at.as_ref()),
        }
    }
}

/// Drops `password_hash`.
impl From<member::Model> for MemberSummary {
    fn from(m: member::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            display_name: m.display_name,
            role: m.role,
            manager_id: m.manager_id,
            last_login_at: canonical_opt(m.last_login_at.as_ref()),
            created_at: canonical(&m.created_at),
        }
    }
}
