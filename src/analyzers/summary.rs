use std::collections::HashMap;

use crate::analyzers::types::{AverageLapTime, DriverSummary};
use crate::lap_time::LapTime;

/// Joins the ranked averages with the fastest-lap mapping, keeping ranking order.
///
/// A ranked driver with no fastest lap gets `None`, written as `N/A`.
pub fn build_summary(
    ranked: &[AverageLapTime],
    fastest: &HashMap<String, LapTime>,
) -> Vec<DriverSummary> {
    ranked
        .iter()
        .map(|r| DriverSummary {
            driver: r.driver.clone(),
            average_time: r.average,
            fastest_time: fastest.get(&r.driver).copied(),
        })
        .collect()
}
