//! Tokenizer for a single photo description line
//!
//! This module handles the *shape* of a line only: splitting it into its
//! filename, city, and timestamp fields and parsing the timestamp. Field
//! validation (lengths, year range, extension set) happens afterwards in
//! [`validator`](super::validator).

use chrono::NaiveDateTime;

use crate::constants::{EXTENSION_SEPARATOR, FIELD_SEPARATOR, TIMESTAMP_FORMAT};
use crate::{Error, Result};

/// The tokenized fields of one input line, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// Filename stem, before the extension separator
    pub base_name: &'a str,

    /// Extension, after the extension separator
    pub extension: &'a str,

    /// City field
    pub city: &'a str,

    /// Timestamp, parsed from the exact `YYYY-MM-DD HH:MM:SS` format
    pub timestamp: NaiveDateTime,
}

/// Tokenize one line into its fields
///
/// The line must consist of exactly three `", "`-separated segments, the first
/// of which is a filename with exactly one extension separator. Any deviation
/// from that shape, including a timestamp that does not match the exact
/// format, is a [`Error::MalformedLine`] carrying the 1-based `line_number`.
pub fn tokenize_line(line: &str, line_number: usize) -> Result<RawLine<'_>> {
    let segments: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if segments.len() != 3 {
        return Err(Error::malformed_line(
            line_number,
            format!(
                "expected 3 comma-separated fields (filename, city, timestamp), found {}",
                segments.len()
            ),
        ));
    }
    let (filename, city, timestamp_str) = (segments[0], segments[1], segments[2]);

    let name_parts: Vec<&str> = filename.split(EXTENSION_SEPARATOR).collect();
    if name_parts.len() != 2 {
        return Err(Error::malformed_line(
            line_number,
            format!("expected a single '.' extension separator in '{}'", filename),
        ));
    }
    let (base_name, extension) = (name_parts[0], name_parts[1]);

    let timestamp = NaiveDateTime::parse_from_str(timestamp_str, TIMESTAMP_FORMAT)
        .map_err(|e| {
            Error::malformed_line(
                line_number,
                format!(
                    "invalid timestamp '{}' (expected 'YYYY-MM-DD HH:MM:SS'): {}",
                    timestamp_str, e
                ),
            )
        })?;

    Ok(RawLine {
        base_name,
        extension,
        city,
        timestamp,
    })
}
