//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (pool exhaustion,
//! failed migrations, missing backends) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / file / constraint failure from `SQLite`.
    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// No connection could be taken from the `SQLite` pool.
    #[cfg(feature = "sqlite")]
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// SQL / connection / timeout failure from `PostgreSQL`.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Postgres(#[source] sqlx::Error),

    /// The blocking task running a `SQLite` call panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(String),

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(String),

    /// The configured backend was not compiled in.
    #[error("unsupported storage backend: {0}")]
    Unsupported(&'static str),
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Postgres(err)
    }
}
