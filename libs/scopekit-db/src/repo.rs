use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

use scopekit_search::{Predicate, SearchField, SearchRepository, Sort, SortDir, StorageError};

use crate::cond::predicate_condition;
use crate::entity::FieldToColumn;

/// [`SearchRepository`] over one SeaORM entity.
///
/// Count and page queries are built from the same `Condition`, so their
/// results always agree on the matching set.
pub struct SeaSearchRepository<M, F> {
    db: DatabaseConnection,
    _mapping: PhantomData<fn() -> (M, F)>,
}

impl<M, F> SeaSearchRepository<M, F> {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _mapping: PhantomData,
        }
    }
}

impl<M, F> Clone for SeaSearchRepository<M, F> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

fn sea_order(dir: SortDir) -> Order {
    match dir {
        SortDir::Asc => Order::Asc,
        SortDir::Desc => Order::Desc,
    }
}

#[async_trait]
impl<M, F> SearchRepository for SeaSearchRepository<M, F>
where
    F: SearchField,
    M: FieldToColumn<F>,
    <M::Entity as EntityTrait>::Model: Send + Sync,
{
    type Field = F;
    type Row = <M::Entity as EntityTrait>::Model;

    async fn count(&self, predicate: &Predicate<F>) -> Result<u64, StorageError> {
        M::Entity::find()
            .filter(predicate_condition::<F, M>(predicate))
            .count(&self.db)
            .await
            .map_err(StorageError::new)
    }

    async fn fetch_page(
        &self,
        predicate: &Predicate<F>,
        order: &[Sort<F>],
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self::Row>, StorageError> {
        let query = order.iter().fold(
            M::Entity::find().filter(predicate_condition::<F, M>(predicate)),
            |q, s| q.order_by(M::map_field(s.field), sea_order(s.dir)),
        );
        query
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(StorageError::new)
    }
}
