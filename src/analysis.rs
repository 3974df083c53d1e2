//! Aggregate statistics over loaded records.
//!
//! Everything here is pure: the same slice of records always yields the same
//! [`Summary`], with ties broken by input order.

use crate::models::{CategoryCount, Record, Summary};
use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Compute the [`Summary`] for `records`.
///
/// An empty slice is a regular input and produces [`Summary::empty`].
pub fn summarize(records: &[Record]) -> Summary {
    if records.is_empty() {
        return Summary::empty();
    }

    let total = records.len();
    let total_views: u128 = records.iter().map(|r| u128::from(r.views)).sum();

    Summary {
        total,
        top: most_viewed(records).cloned(),
        by_category: count_by_category(records),
        average_views: total_views as f64 / total as f64,
    }
}

/// The first record holding the maximum view count.
///
/// `Iterator::max_by_key` keeps the last maximum, so the scan is explicit.
fn most_viewed(records: &[Record]) -> Option<&Record> {
    records.iter().fold(None, |best: Option<&Record>, record| match best {
        Some(b) if b.views >= record.views => Some(b),
        _ => Some(record),
    })
}

/// Count records per category, largest count first.
///
/// Categories are collected in first-seen order during one pass; the
/// stable sort that follows keeps that order among equal counts.
fn count_by_category(records: &[Record]) -> Vec<CategoryCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for record in records {
        let slot = *slots.entry(record.category.as_str()).or_insert_with(|| {
            counts.push(CategoryCount {
                category: record.category.clone(),
                count: 0,
            });
            counts.len() - 1
        });
        counts[slot].count += 1;
    }

    counts
        .into_iter()
        .sorted_by_key(|c| Reverse(c.count))
        .collect()
}
