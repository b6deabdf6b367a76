use std::collections::HashMap;

use crate::analyzers::utility::tally_in_order;
use crate::lap_time::LapTime;
use crate::records::LapRecord;

/// Returns each driver's fastest lap over the whole dataset.
pub fn fastest_lap_times(laps: &[LapRecord]) -> HashMap<String, LapTime> {
    tally_in_order(
        laps,
        |l| l.driver.as_str(),
        |l| l.time,
        |best, l| *best = (*best).min(l.time),
    )
    .into_iter()
    .map(|(driver, best)| (driver.to_string(), best))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lap(driver: &str, lap: u32, seconds: u32) -> LapRecord {
        LapRecord {
            driver: driver.to_string(),
            lap,
            time: LapTime::from_seconds(seconds),
        }
    }

    #[test]
    fn test_fastest_lap_per_driver() {
        let data = vec![
            lap("A", 1, 80),
            lap("A", 2, 82),
            lap("A", 3, 78),
            lap("B", 1, 95),
            lap("B", 2, 93),
            lap("B", 3, 99),
        ];

        let fastest = fastest_lap_times(&data);

        assert_eq!(fastest.len(), 2);
        assert_eq!(fastest["A"].to_string(), "1:18");
        assert_eq!(fastest["B"].to_string(), "1:33");
    }

    #[test]
    fn test_covers_drivers_outside_the_ranking() {
        let data: Vec<_> = ["A", "B", "C", "D", "E"]
            .iter()
            .enumerate()
            .flat_map(|(i, d)| (1..=3).map(move |n| lap(d, n, 80 + i as u32 + n)))
            .collect();

        let fastest = fastest_lap_times(&data);

        assert_eq!(fastest.len(), 5);
        assert_eq!(fastest["E"].seconds(), 85);
    }
}
