use serde::{Deserialize, Serialize};

/// Human-readable placement of a device, managed out-of-band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub device_id: String,
    pub location: String,
}

impl Location {
    #[must_use]
    pub fn new(device_id: impl Into<String>, location: impl Into<String>) -> Self {
        Self { device_id: device_id.into(), location: location.into() }
    }
}
