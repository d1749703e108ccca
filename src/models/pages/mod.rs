pub mod contracts;
pub mod customers;
pub mod invoices;
pub mod purchase_orders;
pub mod suppliers;
pub mod territories;

use crate::grid::{FilterOption, Row, Variant};
use serde_json::Value;

/// Turns a JSON array literal into rows, skipping anything that is not an object.
fn records(value: Value) -> Vec<Row> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Filter options whose label and value are the same text.
fn options(values: &[&str]) -> Vec<FilterOption> {
    values.iter().map(|v| FilterOption::new(*v, *v)).collect()
}

fn status_tones() -> Vec<(String, Variant)> {
    [
        ("Active", Variant::Success),
        ("Approved", Variant::Success),
        ("Paid", Variant::Success),
        ("Delivered", Variant::Success),
        ("Pending", Variant::Warning),
        ("Draft", Variant::Secondary),
        ("Under Review", Variant::Warning),
        ("Overdue", Variant::Destructive),
        ("Expired", Variant::Destructive),
        ("Cancelled", Variant::Destructive),
        ("Inactive", Variant::Outline),
    ]
    .into_iter()
    .map(|(value, tone)| (value.to_string(), tone))
    .collect()
}
