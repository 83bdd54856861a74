//! Typed error enum for the service layer.
//!
//! The first three variants carry the short fixed messages callers see;
//! the hosting layer decides how each maps onto a transport response.

use homesense_core::ConfigError;
use homesense_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying input, auth and storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Required request fields (`password`, `devices`) are absent or unusable.
    #[error("Incorrect parameters")]
    InvalidInput(String),

    /// Supplied password does not hash to the configured digest.
    #[error("Incorrect password")]
    Unauthorized,

    /// More devices requested than `MAX_DEVICES_PER_REQUEST`.
    #[error("Too many devices")]
    TooManyDevices { count: usize },

    /// No measurement has ever been stored for the device.
    #[error("no measurement recorded for device {device_id}")]
    NotFound { device_id: String },

    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Startup configuration could not be turned into a service.
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ServiceError {
    /// Detail for server-side logs; `Display` stays at the fixed public message.
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidInput(reason) => format!("Incorrect parameters: {reason}"),
            Self::TooManyDevices { count } => format!("Too many devices: {count}"),
            other => other.to_string(),
        }
    }
}
