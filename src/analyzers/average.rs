use tracing::debug;

use crate::analyzers::types::AverageLapTime;
use crate::analyzers::utility::{mean, tally_in_order};
use crate::lap_time::LapTime;
use crate::records::LapRecord;

/// Number of drivers kept in the ranking.
pub const TOP_N: usize = 3;

/// Ranks drivers by mean lap time, fastest first, and keeps the top [`TOP_N`].
///
/// The sort is stable and keyed only on the mean, so drivers with identical
/// means stay in first-appearance order. The reported average truncates the
/// mean to whole seconds.
pub fn average_lap_times(laps: &[LapRecord]) -> Vec<AverageLapTime> {
    let totals = tally_in_order(
        laps,
        |l| l.driver.as_str(),
        |l| (u64::from(l.time.seconds()), 1usize),
        |(total, count), l| {
            *total += u64::from(l.time.seconds());
            *count += 1;
        },
    );

    let mut ranked: Vec<(&str, f64)> = totals
        .into_iter()
        .map(|(driver, (total, count))| (driver, mean(total, count)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.truncate(TOP_N);

    debug!(?ranked, "Ranked drivers by average lap time");

    ranked
        .into_iter()
        .map(|(driver, mean_seconds)| AverageLapTime {
            driver: driver.to_string(),
            mean_seconds,
            average: LapTime::from_seconds(mean_seconds.floor() as u32),
        })
        .collect()
}
