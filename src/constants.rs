//! Application constants for the photo renamer
//!
//! This module contains the validation limits and format definitions used
//! throughout the renaming pipeline.

// =============================================================================
// Batch Limits
// =============================================================================

/// Minimum number of photo lines in a batch
pub const MIN_PHOTO_COUNT: usize = 1;

/// Maximum number of photo lines in a batch
pub const MAX_PHOTO_COUNT: usize = 100;

// =============================================================================
// Field Limits
// =============================================================================

/// Minimum length of a photo base name or city name, in characters
pub const MIN_NAME_LEN: usize = 1;

/// Maximum length of a photo base name or city name, in characters
pub const MAX_NAME_LEN: usize = 20;

/// Earliest accepted timestamp year, inclusive
pub const MIN_YEAR: i32 = 2000;

/// Latest accepted timestamp year, inclusive
pub const MAX_YEAR: i32 = 2020;

/// Allowed photo file extensions (case-sensitive, lowercase only)
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg"];

// =============================================================================
// Input Format
// =============================================================================

/// Separator between the filename, city, and timestamp fields of a line
pub const FIELD_SEPARATOR: &str = ", ";

/// Separator between a filename's stem and its extension
pub const EXTENSION_SEPARATOR: char = '.';

/// Exact chrono format string for photo timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
