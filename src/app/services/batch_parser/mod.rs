//! Batch parser for line-oriented photo descriptions
//!
//! This module turns raw input text into validated [`PhotoRecord`]s, rejecting
//! malformed or out-of-range input before any record reaches the rest of the
//! pipeline. Validation is fail-fast: the first violation aborts the whole
//! parse and no partial record list is ever returned.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration over the input lines
//! - [`line_parser`] - Tokenizer for the shape of a single line
//! - [`validator`] - Field validation rules applied after tokenizing
//!
//! ## Usage
//!
//! ```rust
//! use photo_renamer::app::services::batch_parser::BatchParser;
//! use photo_renamer::config::ValidationConfig;
//!
//! # fn example() -> photo_renamer::Result<()> {
//! let parser = BatchParser::new(ValidationConfig::default());
//! let records = parser.parse("photo.jpg, Krakow, 2013-09-05 14:08:15")?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].city, "Krakow");
//! # Ok(())
//! # }
//! ```
//!
//! [`PhotoRecord`]: crate::app::models::PhotoRecord

pub mod line_parser;
pub mod parser;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_parser::RawLine;
pub use parser::BatchParser;
