//! Allow-listed search fields per resource.

use scopekit_search::{FieldKind, SearchField};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvoiceField {
    Id,
    Number,
    Status,
    Memo,
    CustomerId,
    OwnerId,
    AmountCents,
    IssuedAt,
    CreatedAt,
}

impl SearchField for InvoiceField {
    const FIELDS: &'static [Self] = &[
        InvoiceField::Id,
        InvoiceField::Number,
        InvoiceField::Status,
        InvoiceField::Memo,
        InvoiceField::CustomerId,
        InvoiceField::OwnerId,
        InvoiceField::AmountCents,
        InvoiceField::IssuedAt,
        InvoiceField::CreatedAt,
    ];

    fn name(&self) -> &'static str {
        match self {
            InvoiceField::Id => "id",
            InvoiceField::Number => "number",
            InvoiceField::Status => "status",
            InvoiceField::Memo => "memo",
            InvoiceField::CustomerId => "customer_id",
            InvoiceField::OwnerId => "owner_id",
            InvoiceField::AmountCents => "amount_cents",
            InvoiceField::IssuedAt => "issued_at",
            InvoiceField::CreatedAt => "created_at",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            InvoiceField::Id | InvoiceField::CustomerId | InvoiceField::OwnerId => FieldKind::Uuid,
            InvoiceField::Number | InvoiceField::Status => FieldKind::Identifier,
            InvoiceField::Memo => FieldKind::Text,
            InvoiceField::AmountCents => FieldKind::I64,
            InvoiceField::IssuedAt | InvoiceField::CreatedAt => FieldKind::DateTimeUtc,
        }
    }

    fn is_sortable(&self) -> bool {
        !matches!(
            self,
            InvoiceField::Memo | InvoiceField::CustomerId | InvoiceField::OwnerId
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberField {
    Id,
    Email,
    DisplayName,
    Role,
    ManagerId,
    LastLoginAt,
    CreatedAt,
}

impl SearchField for MemberField {
    const FIELDS: &'static [Self] = &[
        MemberField::Id,
        MemberField::Email,
        MemberField::DisplayName,
        MemberField::Role,
        MemberField::ManagerId,
        MemberField::LastLoginAt,
        MemberField::CreatedAt,
    ];

    fn name(&self) -> &'static str {
        match self {
            MemberField::Id => "id",
            MemberField::Email => "email",
            MemberField::DisplayName => "display_name",
            MemberField::Role => "role",
            MemberField::ManagerId => "manager_id",
            MemberField::LastLoginAt => "last_login_at",
            MemberField::CreatedAt => "created_at",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            MemberField::Id | MemberField::ManagerId => FieldKind::Uuid,
            MemberField::Email | MemberField::Role => FieldKind::Identifier,
            MemberField::DisplayName => FieldKind::Text,
            MemberField::LastLoginAt | MemberField::CreatedAt => FieldKind::DateTimeUtc,
        }
    }

    fn is_sortable(&self) -> bool {
        !matches!(self, MemberField::ManagerId)
    }
}
