//! SQLite connection handling for the counter store.
//!
//! The database lives in a single file next to the server (or in memory
//! for tests). One pool is created at startup and used for the process
//! lifetime. The counter feature has exactly one logical writer stream, so
//! the pool defaults to a single connection; SQLite serializes writers at
//! the database level anyway.
//!
//! Uses [`sqlx`] with runtime query construction (not compile-time checked)
//! so builds do not require a live database. All queries are parameterized.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::DbError;

/// Default maximum number of connections in the pool.
///
/// One logical writer stream per process; a single connection is enough
/// and keeps in-memory databases coherent (each in-memory connection is
/// otherwise its own database).
const DEFAULT_MAX_CONNECTIONS: u32 = 1;

/// Default acquire timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Filename that selects an in-memory database.
const MEMORY_PATH: &str = ":memory:";

/// Configuration for the SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Path of the database file. Created if missing.
    pub path: PathBuf,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Connection acquire timeout.
    pub connect_timeout: Duration,
}

impl SqliteConfig {
    /// Create a new configuration for a database file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Create a configuration for an in-memory database (tests).
    pub fn in_memory() -> Self {
        Self::new(MEMORY_PATH)
    }

    /// Set the maximum number of connections.
    #[must_use]
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the connection acquire timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

/// Connection pool handle to the SQLite database.
///
/// Wraps a [`sqlx::SqlitePool`] and provides access to the counter store
/// operations via [`StatsStore`].
///
/// [`StatsStore`]: crate::stats_store::StatsStore
#[derive(Clone)]
pub struct SqliteDb {
    pool: SqlitePool,
}

impl SqliteDb {
    /// Open (creating if missing) the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the database cannot be opened.
    pub async fn connect(config: &SqliteConfig) -> Result<Self, DbError> {
        let connect_options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(connect_options)
            .await?;

        tracing::info!(
            path = %config.path.display(),
            max_connections = config.max_connections,
            "Opened SQLite database"
        );

        Ok(Self { pool })
    }

    /// Open a database file with default pool settings.
    ///
    /// Convenience wrapper around [`SqliteDb::connect`] with
    /// [`SqliteConfig::new`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened.
    pub async fn connect_path(path: &Path) -> Result<Self, DbError> {
        let config = SqliteConfig::new(path);
        Self::connect(&config).await
    }

    /// Run all pending migrations from the `migrations/` directory.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Migration`] if any migration fails.
    pub async fn run_migrations(&self) -> Result<(), DbError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed");
        Ok(())
    }

    /// Return a reference to the underlying [`SqlitePool`].
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close all connections in the pool gracefully.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SQLite pool closed");
    }
}
