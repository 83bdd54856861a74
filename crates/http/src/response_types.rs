//! Response types (Serialize)

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IngestResponse {
    pub device_id: String,
    pub time: i64,
    pub inserted: bool,
}
