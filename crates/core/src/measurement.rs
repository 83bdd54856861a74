use serde::{Deserialize, Serialize};

/// One stored sensor reading.
///
/// Keyed by `(device_id, time)`; `time` is milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub device_id: String,
    pub time: i64,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
}

impl Measurement {
    #[must_use]
    pub fn new(device_id: impl Into<String>, time: i64, temperature: f64, humidity: f64) -> Self {
        Self { device_id: device_id.into(), time, temperature, humidity }
    }
}
