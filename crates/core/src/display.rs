use serde::{Deserialize, Serialize};

use crate::PLACEHOLDER_VALUE;

/// Rendering-ready view of one device's latest reading.
///
/// Field names serialize in camelCase; they double as the `{!field!}`
/// tokens of the page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub location: String,
    pub temperature: String,
    pub humidity: String,
    pub absolute_humidity: String,
    pub last_modified_time: String,
}

impl DisplayRecord {
    /// Row shown for a device with no stored reading.
    #[must_use]
    pub fn placeholder(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            temperature: PLACEHOLDER_VALUE.to_owned(),
            humidity: PLACEHOLDER_VALUE.to_owned(),
            absolute_humidity: PLACEHOLDER_VALUE.to_owned(),
            last_modified_time: PLACEHOLDER_VALUE.to_owned(),
        }
    }
}
