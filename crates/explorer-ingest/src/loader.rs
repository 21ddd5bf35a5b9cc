//! Passenger table loading.

use std::path::Path;
use std::time::Duration;

use polars::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::header::ColumnDrift;

/// Delay applied before a load when none is configured, mimicking a slow source.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_secs(5);

/// Loads a passenger CSV file into a table of nullable string columns.
///
/// The call blocks for `simulated_delay` before touching the file. Every
/// column is read as `String` and empty fields become nulls; numeric
/// coercion is left to the preparation pipeline. Columns that differ from
/// the raw passenger layout are logged, not rejected.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] when `path` does not exist
/// - [`IngestError::FileRead`] when it exists but cannot be read
/// - [`IngestError::CsvParse`] when the content is not valid CSV (including an empty file)
pub fn load_passengers(path: &Path, simulated_delay: Duration) -> Result<DataFrame> {
    if !simulated_delay.is_zero() {
        debug!(delay_ms = simulated_delay.as_millis() as u64, "simulating slow load");
        std::thread::sleep(simulated_delay);
    }

    std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        // Zero inference rows: every column stays a string.
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::csv_parse(path, &e))?
        .finish()
        .map_err(|e| IngestError::csv_parse(path, &e))?;

    let columns: Vec<&str> = df
        .get_column_names()
        .into_iter()
        .map(PlSmallStr::as_str)
        .collect();
    let drift = ColumnDrift::detect(&columns);
    if !drift.is_clean() {
        warn!(
            path = %path.display(),
            missing = ?drift.missing,
            unexpected = ?drift.unexpected,
            "passenger file columns differ from the expected layout"
        );
    }

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded passenger file"
    );
    Ok(df)
}
