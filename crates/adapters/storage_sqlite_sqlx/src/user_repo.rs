//! `SQLite` implementation of [`CrudRepository`] for [`User`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use campuscoffee_app::ports::CrudRepository;
use campuscoffee_domain::entity::Identifiable;
use campuscoffee_domain::error::{CoffeeError, NotFoundError};
use campuscoffee_domain::id::UserId;
use campuscoffee_domain::user::User;

use crate::error::{StorageError, write_error};

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: Some(UserId::new(row.try_get("id")?)),
            login_name: row.try_get("login_name")?,
            email_address: row.try_get("email_address")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (login_name, email_address, first_name, last_name) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM users ORDER BY id";
const UPDATE: &str = "UPDATE users SET login_name = ?, email_address = ?, first_name = ?, last_name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";
const DELETE_ALL: &str = "DELETE FROM users";

fn duplicate_value(user: &User, field: &str) -> String {
    match field {
        "login_name" => user.login_name.clone(),
        "email_address" => user.email_address.clone(),
        _ => String::new(),
    }
}

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CrudRepository<User> for SqliteUserRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, CoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(&self, id: UserId) -> impl Future<Output = Result<User, CoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            row.map(|w| w.0)
                .ok_or_else(|| NotFoundError::by_id(User::NAME, id).into())
        }
    }

    fn upsert(&self, mut user: User) -> impl Future<Output = Result<User, CoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            match user.id {
                None => {
                    let result = sqlx::query(INSERT)
                        .bind(&user.login_name)
                        .bind(&user.email_address)
                        .bind(&user.first_name)
                        .bind(&user.last_name)
                        .execute(&pool)
                        .await
                        .map_err(|err| {
                            write_error(err, User::NAME, |field| duplicate_value(&user, field))
                        })?;
                    user.id = Some(UserId::new(result.last_insert_rowid()));
                }
                Some(id) => {
                    let result = sqlx::query(UPDATE)
                        .bind(&user.login_name)
                        .bind(&user.email_address)
                        .bind(&user.first_name)
                        .bind(&user.last_name)
                        .bind(id.get())
                        .execute(&pool)
                        .await
                        .map_err(|err| {
                            write_error(err, User::NAME, |field| duplicate_value(&user, field))
                        })?;
                    if result.rows_affected() == 0 {
                        return Err(NotFoundError::by_id(User::NAME, id).into());
                    }
                }
            }
            Ok(user)
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), CoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::by_id(User::NAME, id).into());
            }
            Ok(())
        }
    }

    fn clear(&self) -> impl Future<Output = Result<(), CoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_ALL)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
