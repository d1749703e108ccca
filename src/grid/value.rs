use serde_json::{Map, Number, Value};

/// A caller-owned record. The grid only ever reads it.
pub type Row = Map<String, Value>;

static NULL: Value = Value::Null;

/// Reads a field, treating a missing key as null.
pub fn field<'a>(row: &'a Row, key: &str) -> &'a Value {
    row.get(key).unwrap_or(&NULL)
}

/// Plain text form of a cell value, used for search, filtering, sorting and raw export.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        // Nested values have no display of their own, fall back to compact JSON
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

// Whole floats print like integers so `45250.0` matches the option "45250"
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64()
}
