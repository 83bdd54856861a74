//! Async trait implementations for `SQLite` `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use homesense_core::{Location, Measurement};

use crate::traits::{LocationStore, MeasurementStore};
use crate::{Storage, StorageError};

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Join(e.to_string()))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`: `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
}

// ── MeasurementStore ─────────────────────────────────────────────

#[async_trait]
impl MeasurementStore for Storage {
    async fn save_measurement(&self, measurement: &Measurement) -> Result<bool, StorageError> {
        delegate!(self, save_measurement, @ref measurement)
    }

    async fn latest_measurement(
        &self,
        device_id: &str,
    ) -> Result<Option<Measurement>, StorageError> {
        delegate!(self, latest_measurement, @str device_id)
    }
}

// ── LocationStore ────────────────────────────────────────────────

#[async_trait]
impl LocationStore for Storage {
    async fn get_location(&self, device_id: &str) -> Result<Option<Location>, StorageError> {
        delegate!(self, get_location, @str device_id)
    }

    async fn save_location(&self, location: &Location) -> Result<(), StorageError> {
        delegate!(self, save_location, @ref location)
    }

    async fn list_locations(&self) -> Result<Vec<Location>, StorageError> {
        delegate!(self, list_locations)
    }

    async fn find_device_by_location(&self, location: &str) -> Result<Option<String>, StorageError> {
        delegate!(self, find_device_by_location, @str location)
    }
}
