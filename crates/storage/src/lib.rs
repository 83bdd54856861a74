//! Storage layer for homesense
//!
//! Measurement and location stores behind async traits. `SQLite` is the
//! default backend; `PostgreSQL` is available with the `postgres` feature.

#[cfg(not(any(feature = "sqlite", feature = "postgres")))]
compile_error!("homesense-storage needs at least one of the `sqlite` or `postgres` features");

mod backend;
mod error;
#[cfg(feature = "sqlite")]
mod migrations;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(feature = "sqlite")]
mod sqlite_async;
#[cfg(feature = "sqlite")]
mod storage;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
#[cfg(feature = "sqlite")]
pub use storage::Storage;
pub use traits::{LocationStore, MeasurementStore};
