//! Row types for the intermediate lap CSV (`Driver,Lap,Time`).

use serde::{Deserialize, Serialize};

use crate::lap_time::LapTime;

/// A lap row exactly as read from CSV, before validation.
///
/// The lap number is kept as text so that non-numeric values surface as
/// validation errors rather than CSV decode errors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawLapRecord {
    #[serde(rename = "Driver")]
    pub driver: String,
    #[serde(rename = "Lap")]
    pub lap: String,
    #[serde(rename = "Time")]
    pub time: String,
}

impl RawLapRecord {
    pub fn new(driver: &str, lap: &str, time: &str) -> Self {
        RawLapRecord {
            driver: driver.to_string(),
            lap: lap.to_string(),
            time: time.to_string(),
        }
    }
}

/// A validated lap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LapRecord {
    #[serde(rename = "Driver")]
    pub driver: String,
    #[serde(rename = "Lap")]
    pub lap: u32,
    #[serde(rename = "Time")]
    pub time: LapTime,
}
