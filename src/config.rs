//! Configuration for validation limits.
//!
//! The limits are fixed by the problem definition but live here as data so the
//! parser depends on a configuration value rather than scattered literals.

use crate::constants;
use serde::{Deserialize, Serialize};

/// Validation limits applied by the batch parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum number of photo lines in a batch (inclusive)
    pub min_photos: usize,

    /// Maximum number of photo lines in a batch (inclusive)
    pub max_photos: usize,

    /// Minimum base name / city name length in characters (inclusive)
    pub min_name_len: usize,

    /// Maximum base name / city name length in characters (inclusive)
    pub max_name_len: usize,

    /// Earliest accepted timestamp year (inclusive)
    pub min_year: i32,

    /// Latest accepted timestamp year (inclusive)
    pub max_year: i32,

    /// Allowed photo extensions, matched case-sensitively
    pub allowed_extensions: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_photos: constants::MIN_PHOTO_COUNT,
            max_photos: constants::MAX_PHOTO_COUNT,
            min_name_len: constants::MIN_NAME_LEN,
            max_name_len: constants::MAX_NAME_LEN,
            min_year: constants::MIN_YEAR,
            max_year: constants::MAX_YEAR,
            allowed_extensions: constants::ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl ValidationConfig {
    /// True if `extension` is one of the allowed extensions
    pub fn is_allowed_extension(&self, extension: &str) -> bool {
        self.allowed_extensions.iter().any(|e| e == extension)
    }
}
