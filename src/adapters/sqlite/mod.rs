//! SQLite adapters - Database implementations for the reader ports.
//!
//! This module provides:
//! - `connect` - Pool setup with foreign keys, WAL and a busy timeout
//! - `run_migrations` - Embedded schema migrations
//! - `SqliteReaderRepository` - Write side (create, set day, delete)
//! - `SqliteProgressReader` - Read side (readers joined with progress)

mod progress_reader;
mod reader_repository;

use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::config::DatabaseConfig;

pub use progress_reader::SqliteProgressReader;
pub use reader_repository::SqliteReaderRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors raised while opening or migrating the database.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreInitError {
    #[error("Failed to open database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Open a connection pool for `config`.
///
/// # Errors
///
/// Returns `StoreInitError` if the URL is malformed or the first connection
/// cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, StoreInitError> {
    let mut options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(config.busy_timeout());

    let mut pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout());

    if config.is_in_memory() {
        // The database lives only as long as a connection holds it open.
        pool = pool.min_connections(1).idle_timeout(None).max_lifetime(None);
    } else {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool = pool.connect_with(options).await?;
    tracing::info!(url = %config.url, "connected to SQLite database");
    Ok(pool)
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns `StoreInitError` if a migration fails.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StoreInitError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Connect and migrate in one step.
///
/// # Errors
///
/// Returns `StoreInitError` if connecting or migrating fails.
pub async fn open(config: &DatabaseConfig) -> Result<SqlitePool, StoreInitError> {
    let pool = connect(config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    open(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database")
}
