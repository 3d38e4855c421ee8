//! Rename pipeline for validated photo records
//!
//! This module composes the grouping, sorting, and renaming stages into one
//! pipeline behind a single entry point. Every stage is a pure function over
//! immutable records; the pipeline only reorganizes records, never mutates
//! them.
//!
//! ## Architecture
//!
//! The pipeline is organized into logical components:
//! - [`grouper`] - Partition records by city in first-seen order
//! - [`sorter`] - Stable chronological ordering within each city group
//! - [`renamer`] - Sequence numbering, zero-padding, and output assembly
//!
//! ## Usage
//!
//! ```rust
//! use photo_renamer::RenamePipeline;
//! use photo_renamer::config::ValidationConfig;
//!
//! # fn example() -> photo_renamer::Result<()> {
//! let pipeline = RenamePipeline::new(ValidationConfig::default());
//! let outcome = pipeline.run("photo.jpg, Krakow, 2013-09-05 14:08:15")?;
//!
//! assert_eq!(outcome.output, "Krakow1.jpg");
//! assert_eq!(outcome.stats.city_count, 1);
//! # Ok(())
//! # }
//! ```

pub mod grouper;
pub mod renamer;
pub mod sorter;

#[cfg(test)]
pub mod tests;

use tracing::debug;

use crate::Result;
use crate::app::services::batch_parser::BatchParser;
use crate::config::ValidationConfig;

use grouper::group_by_city;
use renamer::assign_names;
use sorter::sort_chronologically;

/// Summary statistics for one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenameStats {
    /// Number of photos renamed
    pub photo_count: usize,

    /// Number of distinct cities in the batch
    pub city_count: usize,
}

/// The result of running the pipeline over one input batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    /// Renamed filenames joined by line breaks, in input order
    pub output: String,

    /// Summary statistics
    pub stats: RenameStats,
}

/// End-to-end photo renaming pipeline
///
/// Parses raw input text, groups the records by city, orders each group
/// chronologically, and produces the renamed filenames in input order.
#[derive(Debug, Clone)]
pub struct RenamePipeline {
    parser: BatchParser,
}

impl RenamePipeline {
    /// Create a pipeline with the given validation limits
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            parser: BatchParser::new(config),
        }
    }

    /// Run the full pipeline over one input batch
    pub fn run(&self, input: &str) -> Result<RenameOutcome> {
        let records = self.parser.parse(input)?;
        let photo_count = records.len();

        let mut groups = group_by_city(records);
        debug!("Grouped {} photos into {} cities", photo_count, groups.len());

        sort_chronologically(&mut groups);

        let stats = RenameStats {
            photo_count,
            city_count: groups.len(),
        };
        let renamed = assign_names(&groups);

        Ok(RenameOutcome {
            output: renamed.join("\n"),
            stats,
        })
    }
}
