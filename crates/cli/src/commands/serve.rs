use anyhow::Result;
use homesense_core::Config;
use homesense_http::{create_router, AppState};
use std::sync::Arc;

use crate::open_storage;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let config = Config::from_env()?;
    tracing::info!(
        timezone = %config.timezone,
        missing_devices = %config.missing_devices,
        "Configuration loaded"
    );
    let storage = open_storage(&config).await?;

    let state = Arc::new(AppState::new(storage, &config)?);
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
