use crate::grid::column::Column;
use crate::grid::value::{field, stringify, Row};
use std::collections::BTreeMap;

/// Indices of the rows passing every active column filter and the search term,
/// in their original order.
pub fn filter_and_search(
    rows: &[Row],
    columns: &[Column],
    filters: &BTreeMap<String, String>,
    search: &str,
) -> Vec<usize> {
    let filtered = apply_filters(rows, columns, filters);
    apply_search(rows, columns, filtered, search)
}

fn apply_filters(rows: &[Row], columns: &[Column], filters: &BTreeMap<String, String>) -> Vec<usize> {
    // Only filterable columns take part; entries for anything else are ignored
    let active: Vec<(&Column, &str)> = filters
        .iter()
        .filter_map(|(key, selected)| {
            columns
                .iter()
                .find(|c| c.filterable && &c.key == key)
                .map(|c| (c, selected.as_str()))
        })
        .collect();

    if active.is_empty() {
        return (0..rows.len()).collect();
    }

    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            active
                .iter()
                .all(|(column, selected)| column.match_strategy.matches(field(row, &column.key), selected))
        })
        .map(|(idx, _)| idx)
        .collect()
}

fn apply_search(rows: &[Row], columns: &[Column], indices: Vec<usize>, search: &str) -> Vec<usize> {
    if search.is_empty() {
        return indices;
    }

    let searchable: Vec<&Column> = columns.iter().filter(|c| c.searchable).collect();
    let search_lower = search.to_lowercase();

    indices
        .into_iter()
        .filter(|&idx| {
            searchable
                .iter()
                .any(|c| stringify(field(&rows[idx], &c.key)).to_lowercase().contains(&search_lower))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::column::{FilterOption, MatchStrategy};
    use serde_json::{json, Value};

    fn record(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => Row::new(),
        }
    }

    fn status_column() -> Column {
        Column::new("status", "Status").filter(vec![
            FilterOption::new("Active", "Active"),
            FilterOption::new("Inactive", "Inactive"),
        ])
    }

    fn suppliers() -> Vec<Row> {
        vec![
            record(json!({"supplier": "Dell Technologies", "status": "Active", "notes": "laptops", "region": "West"})),
            record(json!({"supplier": "Acme Corp", "status": "Inactive", "notes": "dell monitors", "region": "East"})),
            record(json!({"supplier": "Globex", "status": "Active", "notes": "", "region": "West"})),
            record(json!({"supplier": "Initech", "status": "Active", "notes": "", "region": "East"})),
            record(json!({"supplier": "Umbrella", "status": "Inactive", "notes": "", "region": "West"})),
        ]
    }

    fn filters(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_single_filter_selects_matching_rows() {
        let columns = vec![Column::new("supplier", "Supplier").searchable(), status_column()];
        let visible = filter_and_search(&suppliers(), &columns, &filters(&[("status", "Active")]), "");
        assert_eq!(visible, vec![0, 2, 3]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let region = Column::new("region", "Region").filter(vec![
            FilterOption::new("West", "West"),
            FilterOption::new("East", "East"),
        ]);
        let columns = vec![status_column(), region];
        let rows = suppliers();

        let one = filter_and_search(&rows, &columns, &filters(&[("status", "Active")]), "");
        let both = filter_and_search(&rows, &columns, &filters(&[("status", "Active"), ("region", "West")]), "");

        assert_eq!(both, vec![0, 2]);
        assert!(both.iter().all(|i| one.contains(i)), "adding a filter must never grow the set");
    }

    #[test]
    fn test_search_only_looks_at_searchable_columns() {
        let columns = vec![
            Column::new("supplier", "Supplier").searchable(),
            Column::new("notes", "Notes"),
        ];
        let visible = filter_and_search(&suppliers(), &columns, &BTreeMap::new(), "dell");
        assert_eq!(visible, vec![0]);
    }

    #[test]
    fn test_search_is_disjunctive_and_case_insensitive() {
        let columns = vec![
            Column::new("supplier", "Supplier").searchable(),
            Column::new("notes", "Notes").searchable(),
        ];
        let visible = filter_and_search(&suppliers(), &columns, &BTreeMap::new(), "DELL");
        assert_eq!(visible, vec![0, 1]);
    }

    #[test]
    fn test_filter_on_non_filterable_column_is_ignored() {
        let columns = vec![Column::new("status", "Status")];
        let visible = filter_and_search(&suppliers(), &columns, &filters(&[("status", "Active")]), "");
        assert_eq!(visible.len(), 5);
    }

    #[test]
    fn test_numbers_compare_as_strings() {
        let rows = vec![record(json!({"qty": 3})), record(json!({"qty": 30}))];
        let columns = vec![Column::new("qty", "Qty").filter(vec![FilterOption::new("Three", "3")])];
        let visible = filter_and_search(&rows, &columns, &filters(&[("qty", "3")]), "");
        assert_eq!(visible, vec![0]);
    }

    #[test]
    fn test_whole_float_matches_integer_option() {
        let rows = vec![record(json!({"total": 45250.0})), record(json!({"total": 45250.5}))];
        let columns = vec![Column::new("total", "Total").filter(vec![FilterOption::new("45,250", "45250")])];
        let visible = filter_and_search(&rows, &columns, &filters(&[("total", "45250")]), "");
        assert_eq!(visible, vec![0]);
    }

    #[test]
    fn test_threshold_strategy() {
        let rows = vec![
            record(json!({"total": 500})),
            record(json!({"total": 25000})),
            record(json!({"total": 12000})),
        ];
        let columns = vec![Column::new("total", "Total")
            .filter(vec![FilterOption::new("10k and above", "10000")])
            .matching(MatchStrategy::AtLeast)];
        let visible = filter_and_search(&rows, &columns, &filters(&[("total", "10000")]), "");
        assert_eq!(visible, vec![1, 2]);
    }

    #[test]
    fn test_missing_field_is_an_empty_cell() {
        let rows = vec![record(json!({"supplier": "Dell"})), record(json!({}))];
        let columns = vec![Column::new("supplier", "Supplier").searchable()];
        assert_eq!(filter_and_search(&rows, &columns, &BTreeMap::new(), "de"), vec![0]);
    }

    #[test]
    fn test_empty_rows_give_empty_result() {
        let columns = vec![status_column()];
        assert!(filter_and_search(&[], &columns, &filters(&[("status", "Active")]), "x").is_empty());
    }

    #[test]
    fn test_no_filters_and_no_search_keeps_everything_in_order() {
        let visible = filter_and_search(&suppliers(), &[status_column()], &BTreeMap::new(), "");
        assert_eq!(visible, vec![0, 1, 2, 3, 4]);
    }
}
