//! Sequence numbering and rename assembly
//!
//! Each city group gets sequence numbers 1..=N in chronological order,
//! zero-padded to the decimal width of the group size. Renames are placed at
//! each record's original input position so line i of the output corresponds
//! to line i of the input.

use crate::app::models::CityGroup;

/// Produce the renamed filename for every record, in input order
///
/// The groups must already be chronologically sorted. Within a group the
/// sequence numbers are a strict 1..=N permutation, so renames can never
/// collide. Padding width is computed per group and never carries over.
pub fn assign_names(groups: &[CityGroup]) -> Vec<String> {
    let total: usize = groups.iter().map(|g| g.len()).sum();
    let mut renamed = vec![String::new(); total];

    for group in groups {
        let width = digit_width(group.len());

        for (position, record) in group.records.iter().enumerate() {
            let sequence = position + 1;
            renamed[record.original_index] = format!(
                "{city}{sequence:0>width$}.{extension}",
                city = group.city,
                sequence = sequence,
                width = width,
                extension = record.extension,
            );
        }
    }

    renamed
}

/// Decimal digit count of `n` (9 -> 1, 10 -> 2, 100 -> 3)
fn digit_width(n: usize) -> usize {
    // Groups are never empty; a record always joins its own group
    n.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::digit_width;

    #[test]
    fn test_digit_width() {
        assert_eq!(digit_width(1), 1);
        assert_eq!(digit_width(9), 1);
        assert_eq!(digit_width(10), 2);
        assert_eq!(digit_width(99), 2);
        assert_eq!(digit_width(100), 3);
    }
}
