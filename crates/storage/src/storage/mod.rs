//! `SQLite` storage implementation.
//!
//! All methods are synchronous; `sqlite_async` wraps them for async callers.

mod locations;
mod measurements;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

use crate::migrations;
use crate::StorageError;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping a `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Per-connection concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

impl Storage {
    /// Open (or create) the database at `db_path` and bring its schema up to date.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or a migration fails.
    pub fn new(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        let pool = Pool::builder().max_size(pool_size.max(1)).build(manager)?;

        let conn = pool.get()?;
        migrations::run_migrations(&conn)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(path = %db_path.display(), pool_size, "Storage initialized with connection pool");

        Ok(Self { pool })
    }
}
