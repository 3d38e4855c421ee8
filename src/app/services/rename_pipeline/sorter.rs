//! Chronological ordering within each city group
//!
//! The sort must be stable: records with identical timestamps keep their
//! relative input order, which fixes the tie-break for sequence numbering.

use crate::app::models::CityGroup;

/// Sort every group's records by ascending timestamp, stably
///
/// `slice::sort_by_key` is a stable sort, so equal timestamps preserve the
/// input order established by the grouper. Cross-group order is untouched.
pub fn sort_chronologically(groups: &mut [CityGroup]) {
    for group in groups.iter_mut() {
        group.records.sort_by_key(|record| record.timestamp);
    }
}
