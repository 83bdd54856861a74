use anyhow::Result;
use homesense_core::Config;
use homesense_service::{LatestReadingsService, ReadingsRequest};

use crate::open_storage;

pub(crate) async fn run_latest(password: String, devices: &str) -> Result<()> {
    let config = Config::from_env()?;
    let storage = open_storage(&config).await?;
    let service = LatestReadingsService::from_config(storage, &config)?;

    let request = ReadingsRequest::from_query(Some(password), Some(devices));
    let records = service.latest_readings(request).await?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
