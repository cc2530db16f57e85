//! CRUD service: create-vs-update policy shared by every entity type.

use std::marker::PhantomData;

use campuscoffee_domain::entity::Identifiable;
use campuscoffee_domain::error::CoffeeError;

use crate::ports::CrudRepository;

/// Generic application service over one entity type.
///
/// Reads, deletes and clears are forwarded to the repository unchanged.
/// [`upsert`](Self::upsert) adds the only policy: an entity carrying an id
/// must already exist, so an update can never implicitly create a record.
/// Repository errors are never translated or swallowed.
pub struct CrudService<E, R> {
    repo: R,
    _entity: PhantomData<fn() -> E>,
}

impl<E, R> CrudService<E, R>
where
    E: Identifiable,
    R: CrudRepository<E>,
{
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// List all records in repository order.
    ///
    /// # Errors
    ///
    /// Returns any error from the repository.
    pub async fn get_all(&self) -> Result<Vec<E>, CoffeeError> {
        self.repo.get_all().await
    }

    /// Look up a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoffeeError::NotFound`] when no record with `id` exists,
    /// or any other error from the repository.
    pub async fn get_by_id(&self, id: E::Id) -> Result<E, CoffeeError> {
        self.repo.get_by_id(id).await
    }

    /// Create `entity` when it has no id, otherwise update the stored record.
    ///
    /// On the update path the existing record is fetched first purely as an
    /// existence guard; the caller's entity is written as given.
    ///
    /// # Errors
    ///
    /// Returns [`CoffeeError::NotFound`] when updating a missing record (the
    /// write is skipped), [`CoffeeError::Duplication`] when the write breaks a
    /// uniqueness constraint, or any other error from the repository.
    pub async fn upsert(&self, entity: E) -> Result<E, CoffeeError> {
        match entity.id() {
            None => {
                tracing::debug!(entity = E::NAME, "creating record");
            }
            Some(id) => {
                tracing::debug!(entity = E::NAME, %id, "updating record");
                self.repo.get_by_id(id).await?;
            }
        }
        self.repo.upsert(entity).await
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoffeeError::NotFound`] when the repository has no record
    /// with `id`, or any other error from the repository.
    pub async fn delete(&self, id: E::Id) -> Result<(), CoffeeError> {
        tracing::debug!(entity = E::NAME, %id, "deleting record");
        self.repo.delete(id).await
    }

    /// Remove every record of this type.
    ///
    /// # Errors
    ///
    /// Returns any error from the repository.
    pub async fn clear(&self) -> Result<(), CoffeeError> {
        tracing::debug!(entity = E::NAME, "clearing records");
        self.repo.clear().await
    }
}
