//! MeasurementStore implementation for PgStorage.

use async_trait::async_trait;
use homesense_core::Measurement;
use sqlx::Row;

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::MeasurementStore;

#[async_trait]
impl MeasurementStore for PgStorage {
    async fn save_measurement(&self, measurement: &Measurement) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "INSERT INTO measurements (device_id, time, temperature, humidity)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (device_id, time) DO NOTHING",
        )
        .bind(&measurement.device_id)
        .bind(measurement.time)
        .bind(measurement.temperature)
        .bind(measurement.humidity)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn latest_measurement(
        &self,
        device_id: &str,
    ) -> Result<Option<Measurement>, StorageError> {
        let row = sqlx::query(
            "SELECT device_id, time, temperature, humidity
               FROM measurements
              WHERE device_id = $1
              ORDER BY time DESC
              LIMIT 1",
        )
        .bind(device_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| -> Result<Measurement, StorageError> {
            Ok(Measurement {
                device_id: row.try_get("device_id")?,
                time: row.try_get("time")?,
                temperature: row.try_get("temperature")?,
                humidity: row.try_get("humidity")?,
            })
        })
        .transpose()
    }
}
