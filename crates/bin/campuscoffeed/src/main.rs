//! # campuscoffeed: campuscoffee daemon
//!
//! Composition root that wires the storage adapter into the services.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize structured logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Report the store's state and run until interrupted (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use campuscoffee_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteReviewRepository, SqliteUserRepository,
};
use campuscoffee_app::services::{CrudService, ReviewService};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services
    let review_service = ReviewService::new(
        CrudService::new(SqliteReviewRepository::new(pool.clone())),
        CrudService::new(SqliteUserRepository::new(pool)),
        config.approval_config()?,
    );

    let users = review_service.users().get_all().await?;
    let reviews = review_service.crud().get_all().await?;
    let approved = reviews.iter().filter(|review| review.approved).count();
    tracing::info!(
        database = config.database_url(),
        users = users.len(),
        reviews = reviews.len(),
        approved,
        min_approvals = review_service.approval().min_count(),
        "campuscoffeed ready"
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");

    Ok(())
}
