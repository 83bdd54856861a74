//! Request/query types (Deserialize)

use serde::Deserialize;

/// `GET /` and `GET /latest` query string. `devices` is comma separated.
#[derive(Debug, Default, Deserialize)]
pub struct LatestQuery {
    pub password: Option<String>,
    pub devices: Option<String>,
}

/// `POST /latest` JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct LatestRequest {
    pub password: Option<String>,
    pub devices: Option<Vec<String>>,
}

/// `POST /api/measurements` JSON body. `time` defaults to the receive time.
#[derive(Debug, Deserialize)]
pub struct MeasurementRequest {
    pub device_id: String,
    pub time: Option<i64>,
    pub temperature: f64,
    pub humidity: f64,
}
