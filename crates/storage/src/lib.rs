use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;

use error::Result;

/// Shared handle to the scores database.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the SQLite database at `database_url`.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Single-connection in-memory database. Every connection to
    /// `sqlite::memory:` is a fresh database, so the pool never recycles it.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the scores table and upgrade a legacy table if one is found.
    ///
    /// Neither step is allowed to stop the application: failures are logged
    /// and the server keeps running against whatever schema is present.
    pub async fn prepare_schema(&self) {
        if let Err(e) = schema::ensure_schema(&self.pool).await {
            tracing::error!("Failed to ensure scores schema: {}", e);
        }

        match schema::migrate_legacy_schema(&self.pool).await {
            Ok(true) => tracing::info!("Legacy scores table migrated, judge attribution dropped"),
            Ok(false) => tracing::debug!("Scores schema is current"),
            Err(e) => tracing::warn!("Legacy schema migration skipped: {}", e),
        }
    }
}
