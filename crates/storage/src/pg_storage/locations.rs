//! LocationStore implementation for PgStorage.

use async_trait::async_trait;
use homesense_core::Location;
use sqlx::Row;

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::LocationStore;

fn row_to_location(row: &sqlx::postgres::PgRow) -> Result<Location, StorageError> {
    Ok(Location { device_id: row.try_get("device_id")?, location: row.try_get("location")? })
}

#[async_trait]
impl LocationStore for PgStorage {
    async fn get_location(&self, device_id: &str) -> Result<Option<Location>, StorageError> {
        let row = sqlx::query("SELECT device_id, location FROM locations WHERE device_id = $1")
            .bind(device_id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_location).transpose()
    }

    async fn save_location(&self, location: &Location) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO locations (device_id, location) VALUES ($1, $2)
             ON CONFLICT (device_id) DO UPDATE SET location = EXCLUDED.location",
        )
        .bind(&location.device_id)
        .bind(&location.location)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_locations(&self) -> Result<Vec<Location>, StorageError> {
        let rows = sqlx::query("SELECT device_id, location FROM locations ORDER BY device_id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_location).collect()
    }

    async fn find_device_by_location(&self, location: &str) -> Result<Option<String>, StorageError> {
        let device_id: Option<String> = sqlx::query_scalar(
            "SELECT device_id FROM locations WHERE location = $1 ORDER BY device_id LIMIT 1",
        )
        .bind(location)
        .fetch_optional(&self.pool)
        .await?;
        Ok(device_id)
    }
}
