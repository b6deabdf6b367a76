//! Data types produced by the aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::lap_time::LapTime;

/// Placeholder written when a ranked driver has no fastest lap.
pub const NOT_AVAILABLE: &str = "N/A";

/// A driver's truncated average lap time, as ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageLapTime {
    pub driver: String,
    pub mean_seconds: f64,
    pub average: LapTime,
}

/// One row of the ranked summary (`Driver,Average Time,Fastest Time`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverSummary {
    #[serde(rename = "Driver")]
    pub driver: String,
    #[serde(rename = "Average Time")]
    pub average_time: LapTime,
    #[serde(rename = "Fastest Time", serialize_with = "or_not_available")]
    pub fastest_time: Option<LapTime>,
}

fn or_not_available<S: Serializer>(time: &Option<LapTime>, serializer: S) -> Result<S::Ok, S::Error> {
    match time {
        Some(t) => serializer.collect_str(t),
        None => serializer.serialize_str(NOT_AVAILABLE),
    }
}

/// Run report written alongside the summary CSV.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub drivers: usize,
    pub laps: usize,
    pub top: Vec<DriverSummary>,
}
