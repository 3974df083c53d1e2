//! Plain-text report rendering and persistence.
//!
//! The report has a fixed layout:
//!
//! ```text
//! Report for file: news_data.csv
//! Total number of news items: 2
//! News item with maximum views: "A" — 10 views
//! Number of news items per category (descending):
//!   X: 2
//! Average views per news item: 7.50
//! ```
//!
//! Lines are joined with `\n` and there is no trailing newline. The same
//! text is printed to standard output and written to `report.txt`.

use crate::error::AnalyzerError;
use crate::models::Summary;
use crate::utils::report_path_for;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Render `summary` for the input file shown as `source_name`.
pub fn format_report(summary: &Summary, source_name: &str) -> String {
    let mut lines = Vec::with_capacity(5 + summary.by_category.len());

    lines.push(format!("Report for file: {}", source_name));
    lines.push(format!("Total number of news items: {}", summary.total));
    match &summary.top {
        Some(top) => lines.push(format!(
            "News item with maximum views: \"{}\" — {} views",
            top.title, top.views
        )),
        None => lines.push("News item with maximum views: none".to_string()),
    }
    lines.push("Number of news items per category (descending):".to_string());
    for entry in &summary.by_category {
        lines.push(format!("  {}: {}", entry.category, entry.count));
    }
    lines.push(format!("Average views per news item: {:.2}", summary.average_views));

    lines.join("\n")
}

/// Write `report` to `report.txt` in the directory of `csv_path`, replacing
/// any previous report.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns [`AnalyzerError::WriteReport`] if the file cannot be created or written.
#[instrument(level = "info", skip_all, fields(csv_path = %csv_path.display()))]
pub fn write_report(report: &str, csv_path: &Path) -> Result<PathBuf, AnalyzerError> {
    let report_path = report_path_for(csv_path);

    fs::write(&report_path, report).map_err(|source| AnalyzerError::WriteReport {
        path: report_path.clone(),
        source,
    })?;
    info!(path = %report_path.display(), bytes = report.len(), "Wrote report");

    Ok(report_path)
}
