use sea_orm::EntityTrait;
use scopekit_search::SearchField;

/// Scope columns of a searchable table.
///
/// Every implementation must name its organization column. Owner and
/// soft-delete columns are optional, but an entity without an owner column
/// yields no rows to a scope that requires ownership.
///
/// ```rust,ignore
/// impl ScopedEntity for invoice::Entity {
///     fn organization_col() -> Self::Column {
///         invoice::Column::OrganizationId
///     }
///     fn owner_col() -> Option<Self::Column> {
///         Some(invoice::Column::OwnerId)
///     }
///     fn deleted_col() -> Option<Self::Column> {
///         Some(invoice::Column::DeletedAt)
///     }
/// }
/// ```
pub trait ScopedEntity: EntityTrait {
    fn organization_col() -> Self::Column;

    fn owner_col() -> Option<Self::Column>;

    /// Nullable timestamp; a non-null value marks the row deleted.
    fn deleted_col() -> Option<Self::Column>;
}

/// Maps the allow-listed fields of a resource onto entity columns.
pub trait FieldToColumn<F: SearchField>: Send + Sync + 'static {
    type Entity: ScopedEntity;

    fn map_field(field: F) -> <Self::Entity as EntityTrait>::Column;
}
