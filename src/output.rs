//! Output formatting and persistence for lap datasets and summaries.
//!
//! Both CSV files always carry a header row, even when there are no data rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::types::{DriverSummary, SummaryReport};
use crate::records::LapRecord;

const LAP_HEADERS: [&str; 3] = ["Driver", "Lap", "Time"];
const SUMMARY_HEADERS: [&str; 3] = ["Driver", "Average Time", "Fastest Time"];

/// Logs a summary report using Rust's debug pretty-print format.
pub fn print_pretty(report: &SummaryReport) {
    debug!("{:#?}", report);
}

/// Writes the generated lap dataset to `path`, replacing any existing file.
pub fn export_laps(path: &Path, laps: &[LapRecord]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_rows(file, &LAP_HEADERS, laps)?;
    info!(path = %path.display(), rows = laps.len(), "Lap dataset written");
    Ok(())
}

/// Writes the ranked summary to `path`, replacing any existing file.
pub fn export_summary(path: &Path, summary: &[DriverSummary]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_rows(file, &SUMMARY_HEADERS, summary)?;
    info!(path = %path.display(), rows = summary.len(), "Summary written");
    Ok(())
}

/// Writes a [`SummaryReport`] as pretty-printed JSON.
pub fn write_report(path: &Path, report: &SummaryReport) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, report)?;
    file.write_all(b"\n")?;
    debug!(path = %path.display(), "Report written");
    Ok(())
}

fn write_rows<W: Write, T: Serialize>(sink: W, headers: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false) // written explicitly so empty files still get one
        .from_writer(sink);

    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
