//! Persistence layer for the StudyMood catalog.
//!
//! Two document collections live here: `mood_entries` (authoritative) and
//! `usage_counters` (a derived, best-effort projection keyed by mood label).
//! The [`catalog`] module owns the synchronization rules between them;
//! repositories stay free of cross-collection logic.

use sqlx::postgres::PgPoolOptions;

pub mod catalog;
pub mod error;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// The pool is built once at startup and handed by reference to the
/// repositories and the catalog service; nothing else manages its lifecycle.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Cheap connectivity probe, used at startup and by the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
