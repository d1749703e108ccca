use crate::grid::column::Column;
use crate::grid::value::{field, stringify, Row};

/// Which text goes into the data rows of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    #[default]
    Raw,
    Rendered,
}

/// A finished CSV document. Writing it anywhere is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub content: String,
    pub row_count: usize,
}

/// Serializes the visible rows, in display order, with one column per schema entry.
pub fn export_csv(columns: &[Column], rows: &[Row], visible: &[usize], mode: ExportMode) -> CsvExport {
    let mut content = String::new();

    let header: Vec<String> = columns.iter().map(|c| escape_field(&c.header)).collect();
    content.push_str(&header.join(","));
    content.push('\n');

    for &idx in visible {
        let Some(row) = rows.get(idx) else {
            continue;
        };

        let record: Vec<String> = columns
            .iter()
            .map(|column| escape_field(&export_text(column, row, mode)))
            .collect();
        content.push_str(&record.join(","));
        content.push('\n');
    }

    CsvExport {
        content,
        row_count: visible.iter().filter(|&&idx| idx < rows.len()).count(),
    }
}

fn export_text(column: &Column, row: &Row, mode: ExportMode) -> String {
    let value = field(row, &column.key);
    match mode {
        ExportMode::Raw => stringify(value),
        ExportMode::Rendered => match column.kind.format(value, row) {
            Ok((text, _)) => text,
            Err(_) => stringify(value),
        },
    }
}

/// Quotes a field holding a comma, quote or line break and doubles inner quotes.
pub fn escape_field(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::column::CellKind;
    use serde_json::{json, Value};

    fn record(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => Row::new(),
        }
    }

    /// Minimal reader for checking what the writer produced.
    fn parse_csv(text: &str) -> Vec<Vec<String>> {
        let mut records = Vec::new();
        let mut record = Vec::new();
        let mut field = String::new();
        let mut quoted = false;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match (ch, quoted) {
                ('"', true) if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                ('"', true) => quoted = false,
                ('"', false) => quoted = true,
                (',', false) => record.push(std::mem::take(&mut field)),
                ('\n', false) => {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                (c, _) => field.push(c),
            }
        }

        records
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", "PO Number"),
            Column::new("supplier", "Supplier"),
            Column::new("totalValue", "Total Value").kind(CellKind::Currency { symbol: "$".to_string() }),
        ]
    }

    #[test]
    fn test_escape_rules() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_tricky_fields_survive_a_round_trip() {
        let rows = vec![record(json!({"id": "a,b", "supplier": "The \"Best\" Co\nLtd", "totalValue": 10}))];
        let csv = export_csv(&columns(), &rows, &[0], ExportMode::Raw);

        let parsed = parse_csv(&csv.content);
        assert_eq!(parsed[1][0], "a,b");
        assert_eq!(parsed[1][1], "The \"Best\" Co\nLtd");
    }

    #[test]
    fn test_only_visible_rows_in_display_order() {
        let rows = vec![
            record(json!({"id": "PO-1", "supplier": "Dell", "totalValue": 50})),
            record(json!({"id": "PO-2", "supplier": "Acme", "totalValue": 10})),
            record(json!({"id": "PO-3", "supplier": "Globex", "totalValue": 30})),
        ];
        let csv = export_csv(&columns(), &rows, &[1, 2], ExportMode::Raw);

        assert_eq!(csv.row_count, 2);
        assert_eq!(
            csv.content,
            "PO Number,Supplier,Total Value\nPO-2,Acme,10\nPO-3,Globex,30\n"
        );
    }

    #[test]
    fn test_raw_whole_floats_have_no_trailing_zero() {
        let rows = vec![
            record(json!({"id": "PO-1", "supplier": "Dell", "totalValue": 45250.0})),
            record(json!({"id": "PO-2", "supplier": "Acme", "totalValue": 899.99})),
        ];
        let csv = export_csv(&columns(), &rows, &[0, 1], ExportMode::Raw);
        assert_eq!(
            csv.content,
            "PO Number,Supplier,Total Value\nPO-1,Dell,45250\nPO-2,Acme,899.99\n"
        );
    }

    #[test]
    fn test_rendered_mode_uses_cell_kind() {
        let rows = vec![
            record(json!({"id": "PO-1", "supplier": "Dell", "totalValue": 1250})),
            record(json!({"id": "PO-2", "supplier": "Acme", "totalValue": "pending"})),
        ];
        let csv = export_csv(&columns(), &rows, &[0, 1], ExportMode::Rendered);
        let parsed = parse_csv(&csv.content);

        assert_eq!(parsed[1][2], "$1,250.00");
        // Unformattable values fall back to raw text
        assert_eq!(parsed[2][2], "pending");
    }

    #[test]
    fn test_nested_values_use_json_fallback() {
        let rows = vec![record(json!({"id": "PO-1", "supplier": {"name": "Dell"}, "totalValue": [1, 2]}))];
        let parsed = parse_csv(&export_csv(&columns(), &rows, &[0], ExportMode::Raw).content);
        assert_eq!(parsed[1][1], "{\"name\":\"Dell\"}");
        assert_eq!(parsed[1][2], "[1,2]");
    }

    #[test]
    fn test_no_rows_gives_header_only() {
        let csv = export_csv(&columns(), &[], &[], ExportMode::Raw);
        assert_eq!(csv.row_count, 0);
        assert_eq!(csv.content, "PO Number,Supplier,Total Value\n");
    }
}
