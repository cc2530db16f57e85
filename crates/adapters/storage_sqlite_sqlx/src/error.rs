//! Storage-specific error type wrapping sqlx errors.

use campuscoffee_domain::error::{CoffeeError, DuplicationError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for CoffeeError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Map a failed write on `entity` to a domain error.
///
/// `UNIQUE` constraint failures become [`DuplicationError`], with the
/// offending columns as the field and `value_of(field)` as the value.
/// Anything else is an opaque storage error.
pub(crate) fn write_error(
    err: sqlx::Error,
    entity: &'static str,
    value_of: impl FnOnce(&str) -> String,
) -> CoffeeError {
    if let sqlx::Error::Database(db) = &err
        && db.is_unique_violation()
    {
        let field = unique_columns(db.message());
        let value = value_of(field.as_str());
        return DuplicationError {
            entity,
            field,
            value,
        }
        .into();
    }
    StorageError::from(err).into()
}

/// Extract bare column names from a `SQLite` unique violation message such as
/// `UNIQUE constraint failed: reviews.pos_id, reviews.author_id`.
fn unique_columns(message: &str) -> String {
    let columns = message.rsplit_once(": ").map_or(message, |(_, cols)| cols);
    columns
        .split(", ")
        .map(|col| col.rsplit_once('.').map_or(col, |(_, name)| name))
        .collect::<Vec<_>>()
        .join(", ")
}
