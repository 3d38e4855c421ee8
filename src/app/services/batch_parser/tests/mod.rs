//! Tests for the batch parser module
//!
//! Unit tests for tokenizing, field validation, and whole-batch parsing.

pub mod line_parser_tests;

// Test helper functions and fixtures
use crate::app::models::PhotoRecord;
use crate::app::services::batch_parser::BatchParser;
use crate::config::ValidationConfig;
use crate::Result;

/// Parse input with the default validation limits
pub fn parse_default(input: &str) -> Result<Vec<PhotoRecord>> {
    BatchParser::new(ValidationConfig::default()).parse(input)
}

/// Build a valid input line for the given fields
pub fn photo_line(name: &str, ext: &str, city: &str, timestamp: &str) -> String {
    format!("{}.{}, {}, {}", name, ext, city, timestamp)
}

/// A batch of `count` identical valid lines
pub fn repeated_lines(count: usize) -> String {
    vec!["photo.jpg, Krakow, 2013-09-05 14:08:15"; count].join("\n")
}
