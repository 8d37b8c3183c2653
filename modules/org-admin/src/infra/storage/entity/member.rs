use sea_orm::entity::prelude::*;
use scopekit_db::ScopedEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: String,
    /// Never leaves the storage layer.
    pub password_hash: String,
    pub manager_id: Option<Uuid>,
    pub last_login_at: Option<DateTimeUtc>,
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
        None
    }

    fn deleted_col() -> Option<Column> {
        Some(Column::DeletedAt)
    }
}
