use std::sync::Arc;

use futures_util::future::{join, join_all};
use homesense_core::{
    Config, DisplayRecord, Measurement, MissingDevicePolicy, ReadingFormatter,
    MAX_DEVICES_PER_REQUEST,
};
use homesense_storage::traits::{LocationStore, MeasurementStore};
use homesense_storage::{StorageBackend, StorageError};

use crate::{PasswordVerifier, ServiceError};

/// Caller input for a latest-readings lookup, before validation.
#[derive(Debug, Clone, Default)]
pub struct ReadingsRequest {
    pub password: Option<String>,
    pub devices: Option<Vec<String>>,
}

impl ReadingsRequest {
    #[must_use]
    pub fn new(password: impl Into<String>, devices: Vec<String>) -> Self {
        Self { password: Some(password.into()), devices: Some(devices) }
    }

    /// Build from query-string style input where devices arrive comma separated.
    ///
    /// Entries are trimmed and empty ones dropped, so `"a,,b "` is `["a", "b"]`.
    #[must_use]
    pub fn from_query(password: Option<String>, devices_csv: Option<&str>) -> Self {
        let devices = devices_csv.map(|csv| {
            csv.split(',').map(str::trim).filter(|d| !d.is_empty()).map(str::to_owned).collect()
        });
        Self { password, devices }
    }
}

/// Outcome of resolving one requested device.
#[derive(Debug)]
pub enum DeviceLookup {
    Found { location: String, measurement: Measurement },
    Missing { device_id: String, location: String },
    Failed { device_id: String, error: StorageError },
}

/// Authenticated, bounded fan-out over the stores producing display rows.
#[derive(Debug, Clone)]
pub struct LatestReadingsService {
    storage: Arc<StorageBackend>,
    verifier: PasswordVerifier,
    formatter: ReadingFormatter,
    missing_devices: MissingDevicePolicy,
}

impl LatestReadingsService {
    #[must_use]
    pub const fn new(
        storage: Arc<StorageBackend>,
        verifier: PasswordVerifier,
        formatter: ReadingFormatter,
        missing_devices: MissingDevicePolicy,
    ) -> Self {
        Self { storage, verifier, formatter, missing_devices }
    }

    pub fn from_config(storage: Arc<StorageBackend>, config: &Config) -> Result<Self, ServiceError> {
        let verifier = PasswordVerifier::from_hex(&config.password_hash)?;
        Ok(Self::new(
            storage,
            verifier,
            ReadingFormatter::new(config.timezone),
            config.missing_devices,
        ))
    }

    /// Location name for a device, falling back to the device id when unmapped.
    pub async fn resolve_location(&self, device_id: &str) -> Result<String, StorageError> {
        let location = self.storage.get_location(device_id).await?;
        Ok(location.map_or_else(|| device_id.to_owned(), |l| l.location))
    }

    pub async fn fetch_latest(&self, device_id: &str) -> Result<Option<Measurement>, StorageError> {
        self.storage.latest_measurement(device_id).await
    }

    /// Location and latest measurement are fetched concurrently.
    pub async fn lookup_device(&self, device_id: &str) -> DeviceLookup {
        let (location, measurement) =
            join(self.resolve_location(device_id), self.fetch_latest(device_id)).await;

        match (location, measurement) {
            (Ok(location), Ok(Some(measurement))) => DeviceLookup::Found { location, measurement },
            (Ok(location), Ok(None)) => {
                DeviceLookup::Missing { device_id: device_id.to_owned(), location }
            },
            (Err(error), _) | (_, Err(error)) => {
                DeviceLookup::Failed { device_id: device_id.to_owned(), error }
            },
        }
    }

    /// Validate, authenticate and fan out one lookup per device.
    ///
    /// Output rows follow the request order. Validation happens before the
    /// password check and the device cap after it, so an unauthenticated
    /// caller never learns anything about the device list.
    pub async fn latest_readings(
        &self,
        request: ReadingsRequest,
    ) -> Result<Vec<DisplayRecord>, ServiceError> {
        let ReadingsRequest { password, devices } = request;
        let Some(password) = password else {
            return Err(ServiceError::InvalidInput("password missing".to_owned()));
        };
        let Some(devices) = devices else {
            return Err(ServiceError::InvalidInput("devices missing".to_owned()));
        };

        self.verifier.authenticate(Some(&password))?;

        if devices.len() > MAX_DEVICES_PER_REQUEST {
            return Err(ServiceError::TooManyDevices { count: devices.len() });
        }

        tracing::info!(devices = ?devices, "Fetching latest readings");

        let lookups = join_all(devices.iter().map(|d| self.lookup_device(d))).await;
        let mut records = Vec::with_capacity(lookups.len());
        for lookup in lookups {
            match lookup {
                DeviceLookup::Found { location, measurement } => {
                    records.push(self.formatter.format(&measurement, &location));
                },
                DeviceLookup::Missing { device_id, location } => match self.missing_devices {
                    MissingDevicePolicy::Abort => {
                        tracing::warn!(device_id = %device_id, "No measurement for device");
                        return Err(ServiceError::NotFound { device_id });
                    },
                    MissingDevicePolicy::Skip => {
                        tracing::debug!(device_id = %device_id, "Skipping device without measurement");
                    },
                    MissingDevicePolicy::Placeholder => {
                        records.push(DisplayRecord::placeholder(location));
                    },
                },
                DeviceLookup::Failed { device_id, error } => {
                    tracing::error!(device_id = %device_id, error = %error, "Device lookup failed");
                    return Err(ServiceError::Storage(error));
                },
            }
        }
        Ok(records)
    }
}
