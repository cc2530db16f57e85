//! # campuscoffee-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `CrudRepository` port defined in `campuscoffee-app::ports`
//!   for users and reviews
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows, and constraint failures to
//!   domain errors
//!
//! ## Dependency rule
//! Depends on `campuscoffee-app` (for port traits) and `campuscoffee-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

mod error;
mod pool;
mod review_repo;
mod user_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use review_repo::SqliteReviewRepository;
pub use user_repo::SqliteUserRepository;
