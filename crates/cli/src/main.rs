use anyhow::Result;
use clap::{Parser, Subcommand};
use homesense_core::{Config, StorageConfig};
use homesense_storage::StorageBackend;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "homesense")]
#[command(about = "Latest temperature and humidity readings from home sensors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print the SHA-256 digest to put in HOMESENSE_PASSWORD_HASH
    HashPassword { password: String },
    /// Store one reading
    Ingest {
        device: String,
        temperature: f64,
        humidity: f64,
        /// Epoch milliseconds; defaults to now
        #[arg(short, long)]
        time: Option<i64>,
    },
    /// Map a device to a location name
    SetLocation { device: String, location: String },
    /// List device locations
    Locations,
    /// Print the device id mapped to a location name
    DeviceFor { location: String },
    /// Print the latest readings for devices as JSON
    Latest {
        #[arg(short, long)]
        password: String,
        /// Comma-separated device ids
        #[arg(short, long)]
        devices: String,
    },
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub(crate) async fn open_storage(config: &Config) -> Result<Arc<StorageBackend>> {
    if let StorageConfig::Sqlite { path, .. } = &config.storage {
        ensure_db_dir(path)?;
    }
    let storage = StorageBackend::from_config(&config.storage).await?;
    tracing::info!(backend = storage.kind(), "Storage ready");
    Ok(Arc::new(storage))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::HashPassword { password } => commands::password::run_hash_password(&password),
        Commands::Ingest { device, temperature, humidity, time } => {
            commands::ingest::run_ingest(device, temperature, humidity, time).await?;
        },
        Commands::SetLocation { device, location } => {
            commands::locations::run_set_location(&device, &location).await?;
        },
        Commands::Locations => commands::locations::run_list_locations().await?,
        Commands::DeviceFor { location } => {
            commands::locations::run_device_for(&location).await?;
        },
        Commands::Latest { password, devices } => {
            commands::latest::run_latest(password, &devices).await?;
        },
    }

    Ok(())
}
