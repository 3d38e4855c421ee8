//! Partitioning of photo records into per-city groups
//!
//! Group order follows the first occurrence of each city in the input, and
//! records keep their input order within a group. A hash map would not
//! guarantee that iteration order, so groups are kept as an ordered list.

use crate::app::models::{CityGroup, PhotoRecord};

/// Partition records into city groups in first-seen city order
///
/// Pure and infallible: records are assumed already validated, and every
/// record lands in exactly one group.
pub fn group_by_city(records: Vec<PhotoRecord>) -> Vec<CityGroup> {
    let mut groups: Vec<CityGroup> = Vec::new();

    for record in records {
        match groups.iter_mut().find(|g| g.city == record.city) {
            Some(group) => group.records.push(record),
            None => {
                let mut group = CityGroup::new(record.city.clone());
                group.records.push(record);
                groups.push(group);
            }
        }
    }

    groups
}
