//! Path and string helpers.
//!
//! This module provides helper functions used throughout the application:
//! - Display names for input files in the report header
//! - Location of the persisted report beside the input
//! - String truncation for log fields

use std::path::{Path, PathBuf};

/// File name of the persisted report.
pub const REPORT_FILE_NAME: &str = "report.txt";

/// The final component of `path`, as shown in the report header.
///
/// Falls back to the whole path when there is no file name component
/// (for example `..`).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(display_name(Path::new("data/news.csv")), "news.csv");
/// ```
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Where the report for `csv_path` is written: `report.txt` in the same directory.
///
/// A bare file name such as `news.csv` has an empty parent, so the report
/// lands in the working directory as plain `report.txt`.
pub fn report_path_for(csv_path: &Path) -> PathBuf {
    csv_path.with_file_name(REPORT_FILE_NAME)
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and the number
/// of dropped characters appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 chars)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max).collect();
        format!("{}…(+{} chars)", kept, len - max)
    }
}
