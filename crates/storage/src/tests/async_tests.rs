//! The async trait surface, exercised through `StorageBackend`.

#![expect(clippy::unwrap_used, reason = "test code")]

use homesense_core::{Location, Measurement};

use super::create_test_storage;
use crate::traits::{LocationStore, MeasurementStore};
use crate::StorageBackend;

#[tokio::test]
async fn backend_dispatches_measurements() {
    let (storage, _temp_dir) = create_test_storage();
    let backend = StorageBackend::Sqlite(storage);
    assert_eq!(backend.kind(), "sqlite");

    let m = Measurement::new("porch", 100, 12.0, 70.0);
    assert!(MeasurementStore::save_measurement(&backend, &m).await.unwrap());
    assert!(!MeasurementStore::save_measurement(&backend, &m).await.unwrap());

    let latest = backend.latest_measurement("porch").await.unwrap();
    assert_eq!(latest, Some(m));
}

#[tokio::test]
async fn backend_dispatches_locations() {
    let (storage, _temp_dir) = create_test_storage();
    let backend = StorageBackend::Sqlite(storage);

    LocationStore::save_location(&backend, &Location::new("porch", "Porch")).await.unwrap();

    let found = LocationStore::get_location(&backend, "porch").await.unwrap();
    assert_eq!(found.map(|l| l.location).as_deref(), Some("Porch"));
    assert_eq!(backend.list_locations().await.unwrap().len(), 1);
    assert_eq!(backend.find_device_by_location("Porch").await.unwrap().as_deref(), Some("porch"));
}

#[tokio::test]
async fn concurrent_reads_share_the_pool() {
    let (storage, _temp_dir) = create_test_storage();
    for i in 0..5 {
        storage.save_measurement(&Measurement::new(format!("d{i}"), i, 20.0, 50.0)).unwrap();
    }
    let backend = StorageBackend::Sqlite(storage);

    let lookups = (0..5).map(|i| {
        let backend = backend.clone();
        async move { backend.latest_measurement(&format!("d{i}")).await }
    });
    let results = spawn_and_collect(lookups).await;
    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(result.unwrap().unwrap().time, i as i64);
    }
}

async fn spawn_and_collect<F, T>(futures: impl Iterator<Item = F>) -> Vec<T>
where
    F: std::future::Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handles: Vec<_> = futures.map(tokio::spawn).collect();
    let mut out = Vec::with_capacity(handles.len());
    for handle in handles {
        out.push(handle.await.unwrap());
    }
    out
}
