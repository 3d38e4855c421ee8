//! Photo Renamer Library
//!
//! A Rust library for renaming batches of photo filenames based on embedded
//! city and timestamp metadata.
//!
//! This library provides tools for:
//! - Parsing line-oriented photo descriptions with strict field validation
//! - Grouping photos by city in first-seen order
//! - Stable chronological ordering within each city group
//! - Deterministic rename generation with per-group zero-padded sequence numbers
//! - Comprehensive error handling with fail-fast validation
//!
//! The whole pipeline is pure and synchronous: the same input text always
//! produces the same output text, and no filesystem renaming is performed.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod batch_parser;
        pub mod rename_pipeline;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CityGroup, PhotoRecord};
pub use app::services::rename_pipeline::{RenameOutcome, RenamePipeline, RenameStats};
pub use config::ValidationConfig;

/// Result type alias for photo renaming operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rename a batch of photos described by `input`, one photo per line.
///
/// Each line has the shape `<basename>.<ext>, <City>, <YYYY-MM-DD HH:MM:SS>`.
/// Returns the renamed filenames joined by line breaks, in the same order as
/// the input lines, or the first validation error encountered.
pub fn rename_photos(input: &str) -> Result<String> {
    let pipeline = RenamePipeline::new(ValidationConfig::default());
    Ok(pipeline.run(input)?.output)
}

/// Comprehensive error types for photo renaming operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Total input line count outside the allowed range
    #[error("Invalid number of photos: got {count}, expected between {min} and {max}")]
    InvalidCount { count: usize, min: usize, max: usize },

    /// Timestamp year outside the allowed range
    #[error("Invalid year: {year} on line {line_number}")]
    InvalidYear { year: i32, line_number: usize },

    /// Base name or city name length outside the allowed range
    #[error("Invalid photo or city name on line {line_number}")]
    InvalidNameLength { line_number: usize },

    /// City not in strict Title Case
    #[error("Invalid city name format: '{city}' on line {line_number}")]
    InvalidCityFormat { city: String, line_number: usize },

    /// Extension not in the allowed set
    #[error("Invalid extension: '{extension}' on line {line_number}")]
    InvalidExtension {
        extension: String,
        line_number: usize,
    },

    /// Line does not match the expected comma-separated shape or timestamp format
    #[error("Malformed line {line_number}: {message}")]
    MalformedLine { line_number: usize, message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an invalid photo count error
    pub fn invalid_count(count: usize, min: usize, max: usize) -> Self {
        Self::InvalidCount { count, min, max }
    }

    /// Create an invalid year error
    pub fn invalid_year(year: i32, line_number: usize) -> Self {
        Self::InvalidYear { year, line_number }
    }

    /// Create an invalid name length error
    pub fn invalid_name_length(line_number: usize) -> Self {
        Self::InvalidNameLength { line_number }
    }

    /// Create an invalid city format error
    pub fn invalid_city_format(city: impl Into<String>, line_number: usize) -> Self {
        Self::InvalidCityFormat {
            city: city.into(),
            line_number,
        }
    }

    /// Create an invalid extension error
    pub fn invalid_extension(extension: impl Into<String>, line_number: usize) -> Self {
        Self::InvalidExtension {
            extension: extension.into(),
            line_number,
        }
    }

    /// Create a malformed line error
    pub fn malformed_line(line_number: usize, message: impl Into<String>) -> Self {
        Self::MalformedLine {
            line_number,
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// True for errors raised by input validation rather than the environment
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::FileNotFound { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
