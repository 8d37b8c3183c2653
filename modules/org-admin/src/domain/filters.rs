//! Client filter inputs.
//!
//! Missing keys are absent filters. An explicit `null` is only meaningful on
//! nullable references (`customer_id`, `manager_id`), where it selects rows
//! without one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scopekit_search::{Filter, PredicateBuilder, SearchFilters};

use crate::domain::fields::{InvoiceField, MemberField};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceFilter {
    #[serde(skip_serializing_if = "Filter::is_absent")]
    pub number: Filter<String>,
    #[serde(skip_serializing_if = "Filter::is_absent")]
    pub status: Filter<String>,
    /// Any of these statuses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<String>,
    /// Substring of the memo.
    #[serde(skip_serializing_if = "Filter::is_absent")]
    pub memo: Filter<String>,
    #[serde(skip_serializing_if = "Filter::is_absent")]
    pub customer_id: Filter<Uuid>,
    #[serde(skip_serializing_if = "Filter::is_absent")]
    pub owner_id: Filter<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<Uuid>,
}

impl SearchFilters for InvoiceFilter {
    type Field = InvoiceField;

    fn apply(&self, b: &mut PredicateBuilder<InvoiceField>) {
        let statuses: Vec<String> = self
            .statuses
            .iter()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect();

        b.text(InvoiceField::Number, self.number.clone())
            .text(InvoiceField::Status, self.status.clone())
            .one_of(InvoiceField::Status, statuses)
            .text(InvoiceField::Memo, self.memo.clone())
            .eq_nullable(InvoiceField::CustomerId, self.customer_id.clone())
            .eq(InvoiceField::OwnerId, self.owner_id.clone())
            .range(InvoiceField::AmountCents, self.amount_min, self.amount_max)
            .range(InvoiceField::IssuedAt, self.issued_from, self.issued_to);
    }

    fn requested_organization(&self) -> Option<Uuid> {
        self.organization_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberFilter {
    #[serde(skip_serializing_if = "Filter::is_absent")]
    pub email: Filter<String>,
    /// Substring of the display name.
    #[serde(skip_serializing_if = "Filter::is_absent")]
    pub display_name: Filter<String>,
    #[serde(skip_serializing_if = "Filter::is_absent")]
    pub role: Filter<String>,
    #[serde(skip_serializing_if = "Filter::is_absent")]
    pub manager_id: Filter<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<Uuid>,
}

impl SearchFilters for MemberFilter {
    type Field = MemberField;

    fn apply(&self, b: &mut PredicateBuilder<MemberField>) {
        b.text(MemberField::Email, self.email.clone())
            .text(MemberField::DisplayName, self.display_name.clone())
            .text(MemberField::Role, self.role.clone().map(|r| r.to_ascii_lowercase()))
            .eq_nullable(MemberField::ManagerId, self.manager_id.clone())
            .range(MemberField::CreatedAt, self.created_from, self.created_to);
    }

    fn requested_organization(&self) -> Option<Uuid> {
        self.organization_id
    }
}
