//! Station registry record

use serde::{Deserialize, Serialize};

/// Station identity record, created only by seeding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub station_id: String,
    #[serde(rename = "type")]
    pub station_type: String,
}

impl Station {
    pub fn new(station_id: impl Into<String>, station_type: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            station_type: station_type.into(),
        }
    }

    /// Display name used in metric payloads, e.g. `"S1: Assembly"`
    pub fn display_name(&self) -> String {
        format!("{}: {}", self.station_id, self.station_type)
    }
}
