//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use homesense_core::{Location, Measurement, StorageConfig};

use crate::traits::{LocationStore, MeasurementStore};
use crate::StorageError;

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::Storage::new(db_path, pool_size)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Open whichever backend the configuration names.
    pub async fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        match config {
            #[cfg(feature = "sqlite")]
            StorageConfig::Sqlite { path, pool_size } => Self::new_sqlite(path, *pool_size),
            #[cfg(not(feature = "sqlite"))]
            StorageConfig::Sqlite { .. } => Err(StorageError::Unsupported("sqlite")),
            #[cfg(feature = "postgres")]
            StorageConfig::Postgres { url } => Self::new_postgres(url).await,
            #[cfg(not(feature = "postgres"))]
            StorageConfig::Postgres { .. } => Err(StorageError::Unsupported("postgres")),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

// ── MeasurementStore ─────────────────────────────────────────────

#[async_trait]
impl MeasurementStore for StorageBackend {
    async fn save_measurement(&self, measurement: &Measurement) -> Result<bool, StorageError> {
        dispatch!(self, MeasurementStore, save_measurement(measurement))
    }

    async fn latest_measurement(
        &self,
        device_id: &str,
    ) -> Result<Option<Measurement>, StorageError> {
        dispatch!(self, MeasurementStore, latest_measurement(device_id))
    }
}

// ── LocationStore ────────────────────────────────────────────────

#[async_trait]
impl LocationStore for StorageBackend {
    async fn get_location(&self, device_id: &str) -> Result<Option<Location>, StorageError> {
        dispatch!(self, LocationStore, get_location(device_id))
    }

    async fn save_location(&self, location: &Location) -> Result<(), StorageError> {
        dispatch!(self, LocationStore, save_location(location))
    }

    async fn list_locations(&self) -> Result<Vec<Location>, StorageError> {
        dispatch!(self, LocationStore, list_locations())
    }

    async fn find_device_by_location(&self, location: &str) -> Result<Option<String>, StorageError> {
        dispatch!(self, LocationStore, find_device_by_location(location))
    }
}
