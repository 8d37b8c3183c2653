//! Predicate to SeaORM `Condition` translation.

use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::Condition;

use scopekit_search::{Clause, FieldKind, Predicate, ScopeClause, SearchField, Value, like_contains_pattern};

use crate::entity::{FieldToColumn, ScopedEntity};

fn deny_all() -> Condition {
    Condition::all().add(Expr::value(false))
}

/// Builds the mandatory scope condition for `E`.
///
/// `organization = ? [AND owner = ?] [AND deleted IS NULL]`
#[must_use]
pub fn scope_condition<E>(scope: &ScopeClause) -> Condition
where
    E: ScopedEntity,
{
    let mut cond = Condition::all().add(Expr::col(E::organization_col()).eq(scope.organization_id()));

    if let Some(owner) = scope.owner_id() {
        let Some(col) = E::owner_col() else {
            tracing::warn!(
                table = %E::default().table_name(),
                "ownership required but entity has no owner column, denying all rows"
            );
            return deny_all();
        };
        cond = cond.add(Expr::col(col).eq(owner));
    }

    if !scope.include_deleted()
        && let Some(col) = E::deleted_col()
    {
        cond = cond.add(Expr::col(col).is_null());
    }

    cond
}

pub(crate) fn to_sea_value(kind: FieldKind, v: &Value) -> sea_orm::Value {
    match v {
        Value::Bool(b) => sea_orm::Value::Bool(Some(*b)),
        Value::I64(n) => sea_orm::Value::BigInt(Some(*n)),
        Value::String(s) => sea_orm::Value::String(Some(Box::new(s.clone()))),
        Value::Uuid(u) if kind == FieldKind::Uuid => sea_orm::Value::Uuid(Some(Box::new(*u))),
        // identifier columns that happen to store uuids as text
        Value::Uuid(u) => sea_orm::Value::String(Some(Box::new(u.to_string()))),
        Value::DateTime(dt) => sea_orm::Value::ChronoDateTimeUtc(Some(Box::new(*dt))),
        Value::Date(d) => sea_orm::Value::ChronoDate(Some(Box::new(*d))),
    }
}

fn clause_expr<F, M>(clause: &Clause<F>) -> SimpleExpr
where
    F: SearchField,
    M: FieldToColumn<F>,
{
    let field = clause.field();
    let column = M::map_field(field);
    let col = Expr::col(column);
    let kind = field.kind();
    match clause {
        Clause::Eq { value, .. } => col.eq(to_sea_value(kind, value)),
        Clause::IsNull { .. } => col.is_null(),
        // LIKE folds case on SQLite but not on Postgres; lower both sides
        Clause::Contains { needle, .. } => Expr::expr(Func::lower(Expr::col(column)))
            .like(LikeExpr::new(like_contains_pattern(needle)).escape('\\')),
        Clause::Gte { value, .. } => col.gte(to_sea_value(kind, value)),
        Clause::Lte { value, .. } => col.lte(to_sea_value(kind, value)),
        Clause::In { values, .. } => {
            col.is_in(values.iter().map(|v| to_sea_value(kind, v)).collect::<Vec<_>>())
        }
    }
}

/// Full condition: scope first, then every client clause.
#[must_use]
pub fn predicate_condition<F, M>(predicate: &Predicate<F>) -> Condition
where
    F: SearchField,
    M: FieldToColumn<F>,
{
    predicate
        .clauses()
        .iter()
        .fold(scope_condition::<M::Entity>(predicate.scope()), |cond, clause| {
            cond.add(clause_expr::<F, M>(clause))
        })
}
