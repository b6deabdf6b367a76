//! CSV reader for the intermediate lap dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::records::RawLapRecord;

/// Reads every lap row from the CSV file at `path`. A header row is required.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row does not have the
/// `Driver`, `Lap` and `Time` columns.
pub fn import_laps(path: &Path) -> Result<Vec<RawLapRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let rows = read_laps(file).with_context(|| format!("reading {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), "Imported lap rows");
    Ok(rows)
}

/// Reads lap rows from any CSV source.
pub fn read_laps<R: Read>(reader: R) -> Result<Vec<RawLapRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: RawLapRecord = result?;
        rows.push(record);
    }

    Ok(rows)
}
