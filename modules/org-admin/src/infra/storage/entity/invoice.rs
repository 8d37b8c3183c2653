use sea_orm::entity::prelude::*;
use scopekit_db::ScopedEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    /// Member who issued the invoice.
    pub owner_id: Uuid,
    pub customer_id: Option<Uuid>,
    pub number: String,
    pub status: String,
    pub memo: String,
    pub amount_cents: i64,
    pub currency: String,
    pub issued_at: DateTimeUtc,
    pub paid_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ScopedEntity for Entity {
    fn organization_col() -> Column {
        Column::OrganizationId
    }

    fn owner_col() -> Option<Column> {
        Some(Column::OwnerId)
    }

    fn deleted_col() -> Option<Column> {
        Some(Column::DeletedAt)
    }
}
