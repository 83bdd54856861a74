use std::sync::Arc;

use homesense_core::Measurement;
use homesense_storage::traits::MeasurementStore;
use homesense_storage::StorageBackend;

use crate::ServiceError;

/// Write path for device readings.
#[derive(Debug, Clone)]
pub struct IngestService {
    storage: Arc<StorageBackend>,
}

impl IngestService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Persist one reading. Returns `false` when `(device_id, time)` already existed.
    ///
    /// Every accepted reading also emits a `metrics` event carrying the raw values.
    pub async fn store_measurement(&self, measurement: Measurement) -> Result<bool, ServiceError> {
        validate(&measurement)?;

        let inserted = self.storage.save_measurement(&measurement).await?;
        if inserted {
            tracing::info!(
                target: "metrics",
                device_id = %measurement.device_id,
                time = measurement.time,
                temperature = measurement.temperature,
                humidity = measurement.humidity,
                "measurement"
            );
        } else {
            tracing::debug!(
                device_id = %measurement.device_id,
                time = measurement.time,
                "Duplicate measurement ignored"
            );
        }
        Ok(inserted)
    }
}

fn validate(measurement: &Measurement) -> Result<(), ServiceError> {
    if measurement.device_id.trim().is_empty() {
        return Err(ServiceError::InvalidInput("device_id is empty".to_owned()));
    }
    if !measurement.temperature.is_finite() || !measurement.humidity.is_finite() {
        return Err(ServiceError::InvalidInput("readings must be finite".to_owned()));
    }
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (IngestService, Arc<StorageBackend>, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = Arc::new(StorageBackend::new_sqlite(&dir.path().join("ingest.db"), 2).unwrap());
        (IngestService::new(Arc::clone(&storage)), storage, dir)
    }

    #[tokio::test]
    async fn stores_and_reads_back() {
        let (service, storage, _dir) = setup();
        let inserted =
            service.store_measurement(Measurement::new("dev-1", 5_000, 19.5, 61.0)).await.unwrap();
        assert!(inserted);

        let latest = storage.latest_measurement("dev-1").await.unwrap().unwrap();
        assert_eq!(latest, Measurement::new("dev-1", 5_000, 19.5, 61.0));
    }

    #[tokio::test]
    async fn duplicate_time_is_not_reinserted() {
        let (service, storage, _dir) = setup();
        assert!(service.store_measurement(Measurement::new("dev-1", 5_000, 19.5, 61.0)).await.unwrap());
        assert!(!service.store_measurement(Measurement::new("dev-1", 5_000, 30.0, 10.0)).await.unwrap());

        let latest = storage.latest_measurement("dev-1").await.unwrap().unwrap();
        assert!((latest.temperature - 19.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn rejects_blank_device() {
        let (service, _storage, _dir) = setup();
        let err = service.store_measurement(Measurement::new("  ", 1, 20.0, 50.0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn rejects_non_finite_values() {
        let (service, _storage, _dir) = setup();
        for (t, h) in [(f64::NAN, 50.0), (20.0, f64::INFINITY)] {
            let err = service.store_measurement(Measurement::new("dev", 1, t, h)).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidInput(_)));
        }
    }
}
