use std::sync::Arc;

use homesense_core::Location;
use homesense_storage::traits::LocationStore;
use homesense_storage::StorageBackend;

use crate::ServiceError;

/// Device-to-location administration.
#[derive(Debug, Clone)]
pub struct LocationService {
    storage: Arc<StorageBackend>,
}

impl LocationService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Map a device to a location, replacing any previous mapping.
    pub async fn set_location(&self, device_id: &str, location: &str) -> Result<Location, ServiceError> {
        let device_id = device_id.trim();
        let location = location.trim();
        if device_id.is_empty() || location.is_empty() {
            return Err(ServiceError::InvalidInput("device_id and location are required".to_owned()));
        }
        let entry = Location::new(device_id, location);
        self.storage.save_location(&entry).await?;
        tracing::info!(device_id = %device_id, location = %location, "Location set");
        Ok(entry)
    }

    pub async fn list_locations(&self) -> Result<Vec<Location>, ServiceError> {
        Ok(self.storage.list_locations().await?)
    }

    /// Reverse lookup; if several devices share a location the lowest id wins.
    pub async fn device_for_location(&self, location: &str) -> Result<Option<String>, ServiceError> {
        Ok(self.storage.find_device_by_location(location).await?)
    }
}
