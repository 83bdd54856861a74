use homesense_core::Measurement;
use rusqlite::{params, OptionalExtension as _};

use super::{get_conn, Storage};
use crate::StorageError;

impl Storage {
    /// Insert a measurement unless one exists for the same `(device_id, time)`.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn save_measurement(&self, measurement: &Measurement) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let inserted = conn.execute(
            "INSERT OR IGNORE INTO measurements (device_id, time, temperature, humidity)
               VALUES (?1, ?2, ?3, ?4)",
            params![
                measurement.device_id,
                measurement.time,
                measurement.temperature,
                measurement.humidity,
            ],
        )?;
        Ok(inserted == 1)
    }

    /// Most recent measurement of a device.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn latest_measurement(&self, device_id: &str) -> Result<Option<Measurement>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let row = conn
            .query_row(
                "SELECT device_id, time, temperature, humidity
                   FROM measurements
                  WHERE device_id = ?1
                  ORDER BY time DESC
                  LIMIT 1",
                params![device_id],
                |row| {
                    Ok(Measurement {
                        device_id: row.get(0)?,
                        time: row.get(1)?,
                        temperature: row.get(2)?,
                        humidity: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }
}
