//! Data models for the photo renaming pipeline
//!
//! This module contains the core data structures flowing through the pipeline:
//! the validated photo record and the per-city grouping of records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single validated photo description
///
/// Records are constructed once by the batch parser and are immutable from
/// then on; grouping and sorting only reorganize them. `original_index` is the
/// record's 0-based position in the input and is used to restore output order
/// after per-city processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// 0-based position of the line this record was parsed from
    pub original_index: usize,

    /// Filename stem, without the extension (e.g., "photo")
    pub base_name: String,

    /// File extension, lowercase (e.g., "jpg")
    pub extension: String,

    /// City the photo was taken in, strict Title Case (e.g., "Krakow")
    pub city: String,

    /// When the photo was taken, to second precision
    pub timestamp: NaiveDateTime,
}

/// All records for one city, in a fixed group order
///
/// Groups are built in first-seen order of cities; the records start in input
/// order and are sorted chronologically by the pipeline before renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityGroup {
    /// The city shared by every record in this group
    pub city: String,

    /// Records for this city
    pub records: Vec<PhotoRecord>,
}

impl CityGroup {
    /// Create an empty group for `city`
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            records: Vec::new(),
        }
    }

    /// Number of photos in this group
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the group holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
