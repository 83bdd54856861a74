//! Storage backend trait abstraction
//!
//! Async domain traits implemented by every backend, so services stay
//! agnostic of `SQLite` vs `PostgreSQL`.

use async_trait::async_trait;
use homesense_core::{Location, Measurement};

use crate::StorageError;

/// Time-ordered sensor readings, keyed by `(device_id, time)`.
#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// Insert a reading. Returns `false` if one already exists for the same
    /// device and timestamp; stored readings are never overwritten.
    async fn save_measurement(&self, measurement: &Measurement) -> Result<bool, StorageError>;

    /// Most recent reading for a device (greatest `time`), if any.
    async fn latest_measurement(
        &self,
        device_id: &str,
    ) -> Result<Option<Measurement>, StorageError>;
}

/// Zero-or-one human readable location per device.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Point lookup by device id.
    async fn get_location(&self, device_id: &str) -> Result<Option<Location>, StorageError>;

    /// Insert or replace the location of a device.
    async fn save_location(&self, location: &Location) -> Result<(), StorageError>;

    /// All known locations ordered by device id.
    async fn list_locations(&self) -> Result<Vec<Location>, StorageError>;

    /// Reverse lookup. When several devices share a location the lowest id wins.
    async fn find_device_by_location(&self, location: &str) -> Result<Option<String>, StorageError>;
}
