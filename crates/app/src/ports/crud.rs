//! Data access port: per-entity-type persistence operations.

use std::future::Future;
use std::sync::Arc;

use campuscoffee_domain::entity::Identifiable;
use campuscoffee_domain::error::CoffeeError;

/// Persistence operations for one entity type `E`.
///
/// Every call is expected to be atomic on its own. Nothing spanning two
/// calls is guaranteed.
pub trait CrudRepository<E: Identifiable>: Send + Sync {
    /// Return every stored record, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<E>, CoffeeError>> + Send;

    /// Fetch one record.
    ///
    /// Fails with [`CoffeeError::NotFound`] when no record has `id`.
    fn get_by_id(&self, id: E::Id) -> impl Future<Output = Result<E, CoffeeError>> + Send;

    /// Insert `entity` when it has no id, otherwise overwrite the stored
    /// record. Returns the persisted value, with its id assigned on insert.
    ///
    /// Fails with [`CoffeeError::Duplication`] on a uniqueness violation.
    fn upsert(&self, entity: E) -> impl Future<Output = Result<E, CoffeeError>> + Send;

    /// Remove one record.
    ///
    /// Fails with [`CoffeeError::NotFound`] when no record has `id`.
    fn delete(&self, id: E::Id) -> impl Future<Output = Result<(), CoffeeError>> + Send;

    /// Remove every record of this type.
    fn clear(&self) -> impl Future<Output = Result<(), CoffeeError>> + Send;
}

impl<E, R> CrudRepository<E> for Arc<R>
where
    E: Identifiable,
    R: CrudRepository<E>,
{
    fn get_all(&self) -> impl Future<Output = Result<Vec<E>, CoffeeError>> + Send {
        (**self).get_all()
    }

    fn get_by_id(&self, id: E::Id) -> impl Future<Output = Result<E, CoffeeError>> + Send {
        (**self).get_by_id(id)
    }

    fn upsert(&self, entity: E) -> impl Future<Output = Result<E, CoffeeError>> + Send {
        (**self).upsert(entity)
    }

    fn delete(&self, id: E::Id) -> impl Future<Output = Result<(), CoffeeError>> + Send {
        (**self).delete(id)
    }

    fn clear(&self) -> impl Future<Output = Result<(), CoffeeError>> + Send {
        (**self).clear()
    }
}
