//! Test utilities and module declarations for storage tests.

use crate::Storage;
use homesense_core::{Location, Measurement};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path, 2).unwrap();
    (storage, temp_dir)
}

pub fn create_test_measurement(device_id: &str, time: i64) -> Measurement {
    Measurement::new(device_id, time, 20.5, 48.0)
}

pub fn create_test_location(device_id: &str, location: &str) -> Location {
    Location::new(device_id, location)
}

mod async_tests;

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn reopening_existing_database_keeps_data() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("reopen.db");

    let storage = Storage::new(&db_path, 1).unwrap();
    assert!(storage.save_measurement(&create_test_measurement("hall", 1_000)).unwrap());
    drop(storage);

    let storage = Storage::new(&db_path, 1).unwrap();
    let latest = storage.latest_measurement("hall").unwrap().unwrap();
    assert_eq!(latest.time, 1_000);
}
