use scopekit_db::FieldToColumn;

use crate::domain::fields::{InvoiceField, MemberField};
use crate::infra::storage::entity::{invoice, member};

pub struct InvoiceColumns;

impl FieldToColumn<InvoiceField> for InvoiceColumns {
    type Entity = invoice::Entity;

    fn map_field(field: InvoiceField) -> invoice::Column {
        match field {
            InvoiceField::Id => invoice::Column::Id,
            InvoiceField::Number => invoice::Column::Number,
            InvoiceField::Status => invoice::Column::Status,
            InvoiceField::Memo => invoice::Column::Memo,
            InvoiceField::CustomerId => invoice::Column::CustomerId,
            InvoiceField::OwnerId => invoice::Column::OwnerId,
            InvoiceField::AmountCents => invoice::Column::AmountCents,
            InvoiceField::IssuedAt => invoice::Column::IssuedAt,
            InvoiceField::CreatedAt => invoice::Column::CreatedAt,
        }
    }
}

pub struct MemberColumns;

impl FieldToColumn<MemberField> for MemberColumns {
    type Entity = member::Entity;

    fn map_field(field: MemberField) -> member::Column {
        match field {
            MemberField::Id => member::Column::Id,
            MemberField::Email => member::Column::Email,
            MemberField::DisplayName => member::Column::DisplayName,
            MemberField::Role => member::Column::Role,
            MemberField::ManagerId => member::Column::ManagerId,
            MemberField::LastLoginAt => member::Column::LastLoginAt,
            MemberField::CreatedAt => member::Column::CreatedAt,
        }
    }
}
