use homesense_core::Location;
use rusqlite::{params, OptionalExtension as _};

use super::{get_conn, Storage};
use crate::StorageError;

fn row_to_location(row: &rusqlite::Row<'_>) -> rusqlite::Result<Location> {
    Ok(Location { device_id: row.get(0)?, location: row.get(1)? })
}

impl Storage {
    /// Get the location of a device.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_location(&self, device_id: &str) -> Result<Option<Location>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let location = conn
            .query_row(
                "SELECT device_id, location FROM locations WHERE device_id = ?1",
                params![device_id],
                row_to_location,
            )
            .optional()?;
        Ok(location)
    }

    /// Insert or replace the location of a device.
    ///
    /// # Errors
    /// Returns error if database upsert fails.
    pub fn save_location(&self, location: &Location) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO locations (device_id, location) VALUES (?1, ?2)
               ON CONFLICT(device_id) DO UPDATE SET location = excluded.location",
            params![location.device_id, location.location],
        )?;
        Ok(())
    }

    /// All locations ordered by device id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_locations(&self) -> Result<Vec<Location>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare("SELECT device_id, location FROM locations ORDER BY device_id")?;
        let rows = stmt.query_map([], row_to_location)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Device id registered at `location`.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn find_device_by_location(&self, location: &str) -> Result<Option<String>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let device_id = conn
            .query_row(
                "SELECT device_id FROM locations WHERE location = ?1 ORDER BY device_id LIMIT 1",
                params![location],
                |row| row.get(0),
            )
            .optional()?;
        Ok(device_id)
    }
}
