//! Core parsing orchestration over the input lines
//!
//! This module drives the tokenizer and validators across the whole batch and
//! produces the ordered record list consumed by the rename pipeline.

use chrono::Datelike;
use tracing::debug;

use crate::Result;
use crate::app::models::PhotoRecord;
use crate::config::ValidationConfig;

use super::line_parser::tokenize_line;
use super::validator::{
    validate_city_format, validate_extension, validate_name_lengths, validate_photo_count,
    validate_year,
};

/// Parser for a batch of photo description lines
#[derive(Debug, Clone)]
pub struct BatchParser {
    config: ValidationConfig,
}

impl BatchParser {
    /// Create a parser with the given validation limits
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// The validation limits this parser applies
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Parse raw input text into an ordered sequence of photo records
    ///
    /// Lines are split on line breaks; a trailing line break does not produce
    /// a phantom empty line. The batch line count is checked once up front,
    /// then each line is tokenized and validated first line to last,
    /// fail-fast on the first violation. On success every record carries its
    /// 0-based position in the input.
    pub fn parse(&self, input: &str) -> Result<Vec<PhotoRecord>> {
        let lines: Vec<&str> = input.lines().collect();

        // Global check before any per-line work
        validate_photo_count(lines.len(), &self.config)?;

        let mut records = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;

            // Shape before fields: a line that doesn't tokenize has no fields
            // to validate
            let raw = tokenize_line(line, line_number)?;

            validate_year(raw.timestamp.year(), &self.config, line_number)?;
            validate_name_lengths(&raw, &self.config, line_number)?;
            validate_city_format(raw.city, line_number)?;
            validate_extension(raw.extension, &self.config, line_number)?;

            records.push(PhotoRecord {
                original_index: index,
                base_name: raw.base_name.to_string(),
                extension: raw.extension.to_string(),
                city: raw.city.to_string(),
                timestamp: raw.timestamp,
            });
        }

        debug!("Parsed {} photo records", records.len());
        Ok(records)
    }
}
