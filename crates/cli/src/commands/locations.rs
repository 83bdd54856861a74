use anyhow::{bail, Result};
use homesense_core::Config;
use homesense_service::LocationService;

use crate::open_storage;

async fn location_service() -> Result<LocationService> {
    let config = Config::from_env()?;
    Ok(LocationService::new(open_storage(&config).await?))
}

pub(crate) async fn run_set_location(device: &str, location: &str) -> Result<()> {
    let entry = location_service().await?.set_location(device, location).await?;
    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}

pub(crate) async fn run_list_locations() -> Result<()> {
    let locations = location_service().await?.list_locations().await?;
    println!("{}", serde_json::to_string_pretty(&locations)?);
    Ok(())
}

pub(crate) async fn run_device_for(location: &str) -> Result<()> {
    match location_service().await?.device_for_location(location).await? {
        Some(device_id) => println!("{device_id}"),
        None => bail!("no device is mapped to location {location:?}"),
    }
    Ok(())
}
