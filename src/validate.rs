//! Record and per-driver checks run before any aggregation.

use tracing::{debug, warn};

use crate::analyzers::utility::tally_in_order;
use crate::error::ValidationError;
use crate::lap_time::LapTime;
use crate::records::{LapRecord, RawLapRecord};

/// Minimum laps every driver in a dataset must have.
pub const MIN_LAPS: usize = 3;

/// Validates raw rows in input order and returns them as typed [`LapRecord`]s.
///
/// Stops at the first bad row. Once every row passes, each driver must have at
/// least [`MIN_LAPS`] rows; the first short driver (by first appearance) is
/// reported.
pub fn validate_laps(rows: &[RawLapRecord]) -> Result<Vec<LapRecord>, ValidationError> {
    let laps = rows
        .iter()
        .map(validate_record)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| warn!(error = %e, "Lap record rejected"))?;

    let counts = tally_in_order(&laps, |l| l.driver.as_str(), |_| 1usize, |n, _| *n += 1);
    if let Some((driver, count)) = counts.iter().find(|(_, count)| *count < MIN_LAPS) {
        let err = ValidationError::InsufficientLaps {
            driver: driver.to_string(),
            count: *count,
        };
        warn!(error = %err, "Driver lap group rejected");
        return Err(err);
    }

    debug!(laps = laps.len(), drivers = counts.len(), "Lap dataset validated");
    Ok(laps)
}

fn validate_record(row: &RawLapRecord) -> Result<LapRecord, ValidationError> {
    if row.driver.trim().is_empty() {
        return Err(ValidationError::InvalidDriverName(row.driver.clone()));
    }

    let lap = row
        .lap
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|lap| *lap > 0)
        .and_then(|lap| u32::try_from(lap).ok())
        .ok_or_else(|| ValidationError::InvalidLapNumber(row.lap.clone()))?;

    let time = LapTime::parse_clock(&row.time)?;

    Ok(LapRecord {
        driver: row.driver.clone(),
        lap,
        time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laps_for(driver: &str, times: &[&str]) -> Vec<RawLapRecord> {
        times
            .iter()
            .enumerate()
            .map(|(i, t)| RawLapRecord::new(driver, &(i + 1).to_string(), t))
            .collect()
    }

    fn valid_dataset() -> Vec<RawLapRecord> {
        let mut rows = laps_for("Max Verstappen", &["1:20", "1:22", "1:18"]);
        rows.extend(laps_for("Lando Norris", &["1:25", "1:30", "1:21", "1:40"]));
        rows
    }

    #[test]
    fn test_accepts_well_formed_dataset() {
        let laps = validate_laps(&valid_dataset()).unwrap();

        assert_eq!(laps.len(), 7);
        assert_eq!(laps[0].driver, "Max Verstappen");
        assert_eq!(laps[0].lap, 1);
        assert_eq!(laps[2].time.seconds(), 78);
    }

    #[test]
    fn test_rejects_empty_driver() {
        let mut rows = valid_dataset();
        rows[1].driver = "   ".to_string();

        assert_eq!(
            validate_laps(&rows),
            Err(ValidationError::InvalidDriverName("   ".to_string()))
        );
    }

    #[test]
    fn test_rejects_non_positive_lap_numbers() {
        for bad in ["0", "-1", "abc", "1.5", ""] {
            let mut rows = valid_dataset();
            rows[0].lap = bad.to_string();

            assert_eq!(
                validate_laps(&rows),
                Err(ValidationError::InvalidLapNumber(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_rejects_bad_time_formats() {
        for bad in ["61:00", "abc", "1-30", "1:60", "1:5"] {
            let mut rows = valid_dataset();
            rows[3].time = bad.to_string();

            assert_eq!(
                validate_laps(&rows),
                Err(ValidationError::InvalidTimeFormat(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_reports_first_bad_record_in_input_order() {
        let mut rows = valid_dataset();
        rows[2].time = "abc".to_string();
        rows[5].lap = "0".to_string();

        assert_eq!(
            validate_laps(&rows),
            Err(ValidationError::InvalidTimeFormat("abc".to_string()))
        );
    }

    #[test]
    fn test_rejects_drivers_with_fewer_than_three_laps() {
        for count in 1..=2 {
            let mut rows = valid_dataset();
            rows.extend(laps_for("Pierre Gasly", &["1:30", "1:31"][..count]));

            assert_eq!(
                validate_laps(&rows),
                Err(ValidationError::InsufficientLaps {
                    driver: "Pierre Gasly".to_string(),
                    count,
                })
            );
        }
    }

    #[test]
    fn test_record_errors_take_precedence_over_lap_counts() {
        let mut rows = laps_for("Pierre Gasly", &["1:30"]);
        rows.extend(laps_for("Carlos Sainz", &["1:30", "bad", "1:31"]));

        assert_eq!(
            validate_laps(&rows),
            Err(ValidationError::InvalidTimeFormat("bad".to_string()))
        );
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        assert_eq!(validate_laps(&[]), Ok(vec![]));
    }
}
