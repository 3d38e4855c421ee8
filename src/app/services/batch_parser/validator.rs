//! Field validation rules for tokenized photo lines
//!
//! Each rule checks one property of an already tokenized line and returns the
//! matching error kind on violation. Rules are applied by the parser in a
//! fixed order: year range, name lengths, city format, extension set.

use crate::config::ValidationConfig;
use crate::{Error, Result};

use super::line_parser::RawLine;

/// Check that the batch line count is within the configured range
pub fn validate_photo_count(count: usize, config: &ValidationConfig) -> Result<()> {
    if count < config.min_photos || count > config.max_photos {
        return Err(Error::invalid_count(
            count,
            config.min_photos,
            config.max_photos,
        ));
    }
    Ok(())
}

/// Check that the timestamp year is within the configured range
pub fn validate_year(year: i32, config: &ValidationConfig, line_number: usize) -> Result<()> {
    if year < config.min_year || year > config.max_year {
        return Err(Error::invalid_year(year, line_number));
    }
    Ok(())
}

/// Check that the base name and city lengths are within the configured range
pub fn validate_name_lengths(
    raw: &RawLine<'_>,
    config: &ValidationConfig,
    line_number: usize,
) -> Result<()> {
    let name_len = raw.base_name.chars().count();
    let city_len = raw.city.chars().count();

    if name_len < config.min_name_len
        || name_len > config.max_name_len
        || city_len < config.min_name_len
        || city_len > config.max_name_len
    {
        return Err(Error::invalid_name_length(line_number));
    }
    Ok(())
}

/// Check that the city is in strict Title Case
///
/// The first character must be uppercase and every remaining character
/// lowercase. A single-character uppercase city is valid.
pub fn validate_city_format(city: &str, line_number: usize) -> Result<()> {
    let mut chars = city.chars();
    let valid = match chars.next() {
        Some(first) => first.is_uppercase() && chars.all(|c| c.is_lowercase()),
        None => false,
    };

    if !valid {
        return Err(Error::invalid_city_format(city, line_number));
    }
    Ok(())
}

/// Check that the extension is one of the allowed extensions
pub fn validate_extension(
    extension: &str,
    config: &ValidationConfig,
    line_number: usize,
) -> Result<()> {
    if !config.is_allowed_extension(extension) {
        return Err(Error::invalid_extension(extension, line_number));
    }
    Ok(())
}
