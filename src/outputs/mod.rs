//! Output generation for the analysis report.
//!
//! # Submodules
//!
//! - [`report`]: Renders a `Summary` as text and persists it beside the input
//!
//! # Output Structure
//!
//! ```text
//! exports/
//! ├── news_data.csv   # input
//! └── report.txt      # overwritten on every run
//! ```

pub mod report;
