//! Data models for news records and the statistics derived from them.
//!
//! This module defines the core data structures used throughout the application:
//! - [`RawRecord`]: One CSV row exactly as read, every column still text
//! - [`Record`]: A typed news item, built from a [`RawRecord`]
//! - [`Summary`]: Aggregate statistics for a whole input file
//! - [`CategoryCount`]: One entry of the per-category breakdown
//!
//! Coercion rules live in the `TryFrom<RawRecord>` conversion: a row without a
//! numeric `id` is rejected, while an unreadable `views` value becomes `0`.
//! Integers too large for 64 bits still count as numeric and are clamped to
//! the nearest representable value.

use serde::Deserialize;
use std::num::{IntErrorKind, ParseIntError};

/// A news row as deserialized from the CSV file.
///
/// Every field defaults to an empty string so that files lacking a column,
/// or rows shorter than the header, still deserialize.
#[derive(Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub publication_date: String,
}

/// A single news item.
///
/// `id` values are not required to be unique; duplicates are kept as
/// separate records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifier of the item. Rows without a parseable id never become records.
    /// Ids beyond the `i64` range are clamped to `i64::MIN` / `i64::MAX`.
    pub id: i64,
    /// Headline, trimmed.
    pub title: String,
    /// Category name, trimmed. The empty string is a valid category.
    pub category: String,
    /// View count, `0` when missing, negative or unparsable, `u64::MAX` when larger.
    pub views: u64,
    /// Publication date as written in the file. Not interpreted.
    pub publication_date: String,
}

impl TryFrom<RawRecord> for Record {
    type Error = ParseIntError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let id = parse_i64_clamped(raw.id.trim())?;
        let views = parse_u64_clamped(raw.views.trim()).unwrap_or(0);

        Ok(Record {
            id,
            title: raw.title.trim().to_string(),
            category: raw.category.trim().to_string(),
            views,
            publication_date: raw.publication_date.trim().to_string(),
        })
    }
}

/// An optional sign followed by one or more ASCII digits.
///
/// The standard parsers report overflow as soon as the accumulated value
/// leaves the type's range, before looking at the remaining characters, so
/// overflow alone does not prove the field was an integer.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_i64_clamped(s: &str) -> Result<i64, ParseIntError> {
    match s.parse::<i64>() {
        Err(e) if is_integer_literal(s) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(e),
        },
        parsed => parsed,
    }
}

fn parse_u64_clamped(s: &str) -> Result<u64, ParseIntError> {
    match s.parse::<u64>() {
        Err(e) if *e.kind() == IntErrorKind::PosOverflow && is_integer_literal(s) => Ok(u64::MAX),
        parsed => parsed,
    }
}

/// Number of records that share a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Aggregate statistics for one analysis run.
///
/// Produced once by [`crate::analysis::summarize`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of valid records.
    pub total: usize,
    /// The first record holding the highest view count, `None` for an empty input.
    pub top: Option<Record>,
    /// Per-category counts, largest first; equal counts keep first-seen order.
    pub by_category: Vec<CategoryCount>,
    /// Mean views per record, `0.0` for an empty input.
    pub average_views: f64,
}

impl Summary {
    /// The summary of an input with no valid records.
    pub fn empty() -> Self {
        Summary {
            total: 0,
            top: None,
            by_category: Vec::new(),
            average_views: 0.0,
        }
    }
}
