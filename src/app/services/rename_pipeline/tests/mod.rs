//! Tests for the rename pipeline module
//!
//! Unit tests for grouping, sorting, renaming, and the composed pipeline.


// Test helper functions and fixtures
use chrono::{NaiveDate, NaiveDateTime};

use crate::app::models::PhotoRecord;

/// Create a test record with the given index, city, and timestamp
pub fn record(original_index: usize, city: &str, timestamp: &str) -> PhotoRecord {
    record_with_ext(original_index, city, timestamp, "jpg")
}

/// Create a test record with an explicit extension
pub fn record_with_ext(
    original_index: usize,
    city: &str,
    timestamp: &str,
    extension: &str,
) -> PhotoRecord {
    PhotoRecord {
        original_index,
        base_name: format!("photo{}", original_index),
        extension: extension.to_string(),
        city: city.to_string(),
        timestamp: parse_ts(timestamp),
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp for fixtures
pub fn parse_ts(timestamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// A fixed date with the given second-of-minute, for tie and order tests
pub fn at_second(second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2013, 9, 5)
        .unwrap()
        .and_hms_opt(14, 8, second)
        .unwrap()
}
