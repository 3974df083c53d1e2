//! # News Analyzer
//!
//! Reads a CSV export of news items and reports simple statistics about it:
//! how many items there are, which one was viewed most, how many items each
//! category holds, and the average number of views.
//!
//! ## Usage
//!
//! ```sh
//! news_analyzer exports/news_data.csv
//! ```
//!
//! The report is printed to standard output and saved as `report.txt` next to
//! the input file. Diagnostics go to standard error, filtered by `RUST_LOG`.
//!
//! ## Architecture
//!
//! The application is a one-way pipeline:
//! 1. **Loading**: Parse CSV rows into typed records, dropping rows without a numeric id
//! 2. **Analysis**: Reduce the records to a `Summary`
//! 3. **Formatting**: Render the summary as fixed-layout text
//! 4. **Output**: Print the text, then persist it beside the input
//!
//! ## Exit status
//!
//! `0` after a report was written; `1` when the path argument is missing or
//! does not name an existing file, or when the report cannot be written.

use clap::Parser;
use std::error::Error;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cli;
mod error;
mod loader;
mod models;
mod outputs;
mod utils;

use cli::Cli;
use error::AnalyzerError;
use outputs::report::{format_report, write_report};
use utils::{display_name, truncate_for_log};

/// How a run ended when no error was raised.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// The report was printed and persisted at `report_path`.
    Reported { report_path: PathBuf },
    /// The input path does not name an existing file; nothing was read or written.
    FileNotFound,
    /// The command line was unusable; the usage message was printed instead.
    UsageError,
}

impl Outcome {
    fn status(&self) -> u8 {
        match self {
            Outcome::Reported { .. } => 0,
            Outcome::FileNotFound | Outcome::UsageError => 1,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let Some(args) = parse_args(std::env::args_os(), &mut io::stdout().lock())? else {
        return Ok(ExitCode::from(Outcome::UsageError.status()));
    };
    debug!(?args.csv_path, "Parsed CLI arguments");

    let start_time = std::time::Instant::now();
    let outcome = match run(&args.csv_path, &mut io::stdout().lock()) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "Analysis failed");
            return Err(e.into());
        }
    };

    let elapsed = start_time.elapsed();
    info!(?elapsed, ?outcome, "Execution complete");
    Ok(ExitCode::from(outcome.status()))
}

/// Parse the command line, printing the usage message to `out` when it is unusable.
///
/// Returns `Ok(None)` after a usage error; no file is touched in that case.
/// `--help` and `--version` are printed by clap, which then exits the process.
fn parse_args<I, T>(args: I, out: &mut dyn Write) -> io::Result<Option<Cli>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(args) => Ok(Some(args)),
        Err(e) if cli::is_informational(e.kind()) => e.exit(),
        Err(e) => {
            debug!(error = %e, "Rejected command-line arguments");
            writeln!(out, "{}", cli::usage_message())?;
            Ok(None)
        }
    }
}

/// Analyze `csv_path`, print the report to `out` and persist it beside the input.
///
/// A missing input file is reported on `out` and yields [`Outcome::FileNotFound`]
/// without touching the filesystem further.
///
/// # Errors
///
/// Fails if the input cannot be read as CSV, if `out` cannot be written, or if
/// `report.txt` cannot be written. In the last case the report has already
/// been printed.
#[instrument(level = "info", skip_all, fields(csv_path = %csv_path.display()))]
fn run(csv_path: &Path, out: &mut dyn Write) -> Result<Outcome, AnalyzerError> {
    if !csv_path.is_file() {
        writeln!(out, "Error: file not found: {}", csv_path.display())?;
        return Ok(Outcome::FileNotFound);
    }

    let records = loader::load_records(csv_path)?;
    let summary = analysis::summarize(&records);
    drop(records);
    if let Some(top) = &summary.top {
        debug!(
            total = summary.total,
            top_id = top.id,
            top_title = %truncate_for_log(&top.title, 80),
            "Summarized records"
        );
    }

    let report = format_report(&summary, &display_name(csv_path));
    writeln!(out, "{}", report)?;
    out.flush()?;

    let report_path = write_report(&report, csv_path)?;
    Ok(Outcome::Reported { report_path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "id,title,category,views,publication_date\n";

    fn run_on(csv_path: &Path) -> (Result<Outcome, AnalyzerError>, String) {
        let mut out = Vec::new();
        let result = run(csv_path, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_report_printed_and_persisted() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("news_data.csv");
        fs::write(
            &csv_path,
            format!("{HEADER}1,A,X,10,2024-01-01\n2,B,X,5,2024-01-02\n"),
        )
        .unwrap();

        let (result, stdout) = run_on(&csv_path);

        let report_path = dir.path().join("report.txt");
        let expected = Outcome::Reported {
            report_path: report_path.clone(),
        };
        assert_eq!(result.unwrap(), expected);
        let persisted = fs::read_to_string(&report_path).unwrap();
        assert_eq!(stdout, format!("{persisted}\n"));
        assert_eq!(
            persisted,
            [
                "Report for file: news_data.csv",
                "Total number of news items: 2",
                "News item with maximum views: \"A\" — 10 views",
                "Number of news items per category (descending):",
                "  X: 2",
                "Average views per news item: 7.50",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_header_only_file() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("empty.csv");
        fs::write(&csv_path, HEADER).unwrap();

        let (result, stdout) = run_on(&csv_path);

        assert!(matches!(result.unwrap(), Outcome::Reported { .. }));
        assert!(stdout.contains("Total number of news items: 0\n"));
        assert!(stdout.contains("News item with maximum views: none\n"));
        assert!(stdout.contains(
            "Number of news items per category (descending):\nAverage views per news item: 0.00"
        ));
    }

    #[test]
    fn test_dirty_rows() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("dirty.csv");
        fs::write(
            &csv_path,
            "id,title,category,publication_date,views\n\
             abc,Dropped,Y,2024-01-01,1000\n\
             1,Kept,X,2024-01-02,\n\
             2,Also kept,X,2024-01-03,4\n",
        )
        .unwrap();

        let (result, stdout) = run_on(&csv_path);

        assert!(result.is_ok());
        assert!(stdout.contains("Total number of news items: 2\n"));
        assert!(stdout.contains("\"Also kept\" — 4 views"));
        assert!(!stdout.contains("  Y: "));
        assert!(stdout.contains("Average views per news item: 2.00"));
    }

    #[test]
    fn test_missing_file_reports_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("absent.csv");

        let (result, stdout) = run_on(&csv_path);

        let outcome = result.unwrap();
        assert_eq!(outcome, Outcome::FileNotFound);
        assert_eq!(outcome.status(), 1);
        assert!(stdout.starts_with("Error: file not found: "));
        assert!(stdout.contains("absent.csv"));
        assert!(!dir.path().join("report.txt").exists());
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempdir().unwrap();

        let (result, _) = run_on(dir.path());

        assert_eq!(result.unwrap(), Outcome::FileNotFound);
        assert!(!dir.path().join("report.txt").exists());
    }

    #[test]
    fn test_existing_report_is_overwritten() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("news.csv");
        fs::write(&csv_path, format!("{HEADER}1,A,X,3,\n")).unwrap();
        fs::write(dir.path().join("report.txt"), "stale").unwrap();

        let (result, stdout) = run_on(&csv_path);

        assert!(result.is_ok());
        let persisted = fs::read_to_string(dir.path().join("report.txt")).unwrap();
        assert_eq!(stdout.trim_end_matches('\n'), persisted);
    }

    #[test]
    fn test_missing_argument_prints_usage_and_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("news.csv"), format!("{HEADER}1,A,X,3,\n")).unwrap();
        let mut out = Vec::new();

        let parsed = parse_args(["news_analyzer"], &mut out).unwrap();

        assert!(parsed.is_none());
        assert_eq!(Outcome::UsageError.status(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", cli::usage_message()));
        assert!(!dir.path().join("report.txt").exists());
    }

    #[test]
    fn test_usage_error_leaves_existing_report_alone() {
        let dir = tempdir().unwrap();
        let report_path = dir.path().join("report.txt");
        fs::write(&report_path, "previous run").unwrap();
        let mut out = Vec::new();

        let parsed = parse_args(["news_analyzer"], &mut out).unwrap();

        assert!(parsed.is_none());
        assert_eq!(fs::read_to_string(&report_path).unwrap(), "previous run");
    }

    #[test]
    fn test_extra_argument_is_a_usage_error() {
        let mut out = Vec::new();

        let parsed = parse_args(["news_analyzer", "a.csv", "b.csv"], &mut out).unwrap();

        assert!(parsed.is_none());
        assert!(String::from_utf8(out).unwrap().starts_with("Error: specify the path"));
    }

    #[test]
    fn test_path_argument_is_parsed() {
        let mut out = Vec::new();

        let parsed = parse_args(["news_analyzer", "data/news.csv"], &mut out).unwrap();

        assert_eq!(parsed.unwrap().csv_path, PathBuf::from("data/news.csv"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_reported_outcome_exits_successfully() {
        let outcome = Outcome::Reported {
            report_path: PathBuf::from("report.txt"),
        };
        assert_eq!(outcome.status(), 0);
    }
}
