use anyhow::Result;
use homesense_core::{Config, Measurement};
use homesense_service::IngestService;

use crate::open_storage;

pub(crate) async fn run_ingest(
    device: String,
    temperature: f64,
    humidity: f64,
    time: Option<i64>,
) -> Result<()> {
    let config = Config::from_env()?;
    let storage = open_storage(&config).await?;
    let service = IngestService::new(storage);

    let time = time.unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
    let inserted =
        service.store_measurement(Measurement::new(device, time, temperature, humidity)).await?;
    println!("{}", serde_json::json!({ "time": time, "inserted": inserted }));
    Ok(())
}
