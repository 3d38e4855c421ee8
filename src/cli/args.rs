//! Command-line argument definitions for the photo renamer
//!
//! This module defines the CLI interface using the clap derive API.

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the photo renamer
///
/// Renames a batch of photo filenames described in a text file, grouping by
/// city and numbering chronologically within each city. The renamed filenames
/// are written to standard output; no files are touched.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "photo-renamer",
    version,
    about = "Rename photo batches by city and chronological order",
    long_about = "Reads a text file with one photo description per line in the form\n\
                  '<basename>.<ext>, <City>, <YYYY-MM-DD HH:MM:SS>' and prints the\n\
                  renamed filenames, one per line, in the same order as the input.\n\
                  Photos are grouped by city and numbered chronologically within\n\
                  each city, zero-padded to the group's digit width."
)]
pub struct Args {
    /// Path to the input file, one photo description per line
    #[arg(value_name = "FILE", help = "Input file with photo descriptions")]
    pub input_path: PathBuf,

    /// Log level for diagnostic output on stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// Suppress diagnostic output, print only the renamed filenames
    #[arg(short = 'q', long = "quiet", help = "Suppress diagnostic output")]
    pub quiet: bool,
}

impl Args {
    /// Effective log level, accounting for quiet mode
    pub fn get_log_level(&self) -> &str {
        if self.quiet {
            "error"
        } else {
            self.log_level.as_str()
        }
    }
}
