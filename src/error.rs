//! Error type shared by the loader, the report writer and the driver.
//!
//! Usage errors and missing input files are not represented here: the driver
//! treats them as expected outcomes and maps them straight to an exit status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort an analysis run.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The input could not be read or decoded as CSV text.
    #[error("failed to read CSV file {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// `report.txt` could not be written next to the input.
    #[error("failed to write report {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
