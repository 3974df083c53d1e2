//! Command-line interface definitions for News Analyzer.
//!
//! This module defines the CLI arguments using the `clap` crate. Logging
//! verbosity is not an argument; it is read from `RUST_LOG`.

use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

/// Command-line arguments for the News Analyzer application.
///
/// # Examples
///
/// ```sh
/// news_analyzer exports/news_data.csv
///
/// # With debug logging on stderr
/// RUST_LOG=debug news_analyzer exports/news_data.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the CSV file with news items
    pub csv_path: PathBuf,
}

/// Whether a parse error is really a request for help or version output.
pub fn is_informational(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

/// Message printed to standard output when the arguments are unusable.
pub fn usage_message() -> String {
    let program = env!("CARGO_PKG_NAME");
    format!(
        "Error: specify the path to the CSV file as an argument.\nExample: {} news_data.csv",
        program
    )
}
