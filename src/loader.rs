//! CSV loading for news records.
//!
//! Columns are matched by header name, so their order in the file does not
//! matter. Rows are converted with `Record::try_from`: rows whose `id` does
//! not parse are dropped without a trace, everything else is kept with its
//! fields coerced to defaults where needed.

use crate::error::AnalyzerError;
use crate::models::{RawRecord, Record};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Load all valid records from the CSV file at `path`, in file order.
///
/// The file handle is closed before this function returns.
///
/// # Errors
///
/// Returns [`AnalyzerError::Csv`] if the file cannot be opened or a row is
/// not valid UTF-8 text.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_records(path: &Path) -> Result<Vec<Record>, AnalyzerError> {
    let csv_error = |source: csv::Error| AnalyzerError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| csv_error(e.into()))?;
    let records = load_from_reader(file).map_err(csv_error)?;
    debug!(count = records.len(), "Loaded records");
    Ok(records)
}

/// Load all valid records from any CSV source.
///
/// Short rows are padded with blank fields so every header column maps to a
/// value; conversion then follows `Record::try_from`.
pub fn load_from_reader<R: io::Read>(input: R) -> Result<Vec<Record>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();
    for row in reader.records() {
        let mut row = row?;
        while row.len() < headers.len() {
            row.push_field("");
        }
        let raw: RawRecord = row.deserialize(Some(&headers))?;
        if let Ok(record) = Record::try_from(raw) {
            records.push(record);
        }
    }
    Ok(records)
}
