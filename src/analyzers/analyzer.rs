use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::analyzers::average::average_lap_times;
use crate::analyzers::fastest::fastest_lap_times;
use crate::analyzers::summary::build_summary;
use crate::analyzers::types::SummaryReport;
use crate::output::{export_summary, print_pretty, write_report};
use crate::parser::import_laps;
use crate::records::RawLapRecord;
use crate::validate::validate_laps;

/// Builds the summary for already-imported rows without touching the filesystem.
///
/// Fails with a [`ValidationError`](crate::error::ValidationError) before any
/// aggregation if a row or driver group is invalid.
pub fn summarize(source: &str, rows: &[RawLapRecord]) -> Result<SummaryReport> {
    let laps = validate_laps(rows)?;

    let ranked = average_lap_times(&laps);
    let fastest = fastest_lap_times(&laps);
    let top = build_summary(&ranked, &fastest);

    Ok(SummaryReport {
        generated_at: Utc::now(),
        source: source.to_string(),
        drivers: fastest.len(),
        laps: laps.len(),
        top,
    })
}

/// Reads the lap CSV at `input`, validates it, and writes the ranked summary
/// to `output` (and the JSON report to `report`, if given).
///
/// Nothing is written unless the whole dataset validates.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn analyze(input: &Path, output: &Path, report: Option<&Path>) -> Result<SummaryReport> {
    let rows = import_laps(input)?;
    let summary = summarize(&input.display().to_string(), &rows)?;

    export_summary(output, &summary.top)?;
    if let Some(path) = report {
        write_report(path, &summary)?;
    }
    print_pretty(&summary);

    info!(
        drivers = summary.drivers,
        laps = summary.laps,
        ranked = summary.top.len(),
        "Summary complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn rows(driver: &str, times: &[&str]) -> Vec<RawLapRecord> {
        times
            .iter()
            .enumerate()
            .map(|(i, t)| RawLapRecord::new(driver, &(i + 1).to_string(), t))
            .collect()
    }

    #[test]
    fn test_summarize_joins_average_and_fastest() {
        let mut data = rows("A", &["1:20", "1:22", "1:18"]);
        data.extend(rows("B", &["1:10", "1:40", "1:40"]));

        let report = summarize("laps.csv", &data).unwrap();

        assert_eq!(report.drivers, 2);
        assert_eq!(report.laps, 6);
        assert_eq!(report.top[0].driver, "A");
        assert_eq!(report.top[0].average_time.to_string(), "1:20");
        assert_eq!(report.top[0].fastest_time.unwrap().to_string(), "1:18");
        assert_eq!(report.top[1].driver, "B");
        assert_eq!(report.top[1].average_time.to_string(), "1:30");
        assert_eq!(report.top[1].fastest_time.unwrap().to_string(), "1:10");
    }

    #[test]
    fn test_summarize_surfaces_validation_error() {
        let data = rows("A", &["1:20", "1:22"]);

        let err = summarize("laps.csv", &data).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::InsufficientLaps {
                driver: "A".to_string(),
                count: 2
            })
        );
    }
}
