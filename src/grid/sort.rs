use crate::grid::value::{as_number, field, stringify, Row};
use crate::grid::view_state::{SortDirection, SortState};
use serde_json::Value;
use std::cmp::Ordering;

/// Orders an already filtered index list. The sort is stable, so rows with equal
/// keys keep their relative order in either direction.
pub fn sort_rows(rows: &[Row], mut indices: Vec<usize>, sort: &SortState) -> Vec<usize> {
    let Some(key) = sort.key.as_deref() else {
        return indices;
    };

    indices.sort_by(|&a, &b| {
        let cmp = compare_values(field(&rows[a], key), field(&rows[b], key));
        match sort.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });

    indices
}

/// Numeric when both sides are numbers, case-insensitive text otherwise.
/// In a mixed column numbers rank before text so the order stays total.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (as_number(a), as_number(b)) {
        (Some(a_num), Some(b_num)) => a_num.total_cmp(&b_num),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => stringify(a).to_lowercase().cmp(&stringify(b).to_lowercase()),
    }
}
