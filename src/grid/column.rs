use crate::grid::error::{ConfigIssue, RenderError};
use crate::grid::value::{as_number, stringify, Row};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied cell formatter for the `Custom` cell kind.
pub type RenderFn = Arc<dyn Fn(&Value, &Row) -> Result<String, RenderError> + Send + Sync>;

/// Visual tone shared by badges and action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// How a selected filter value is compared with a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchStrategy {
    #[default]
    Exact,
    IgnoreCase,
    Contains,
    StartsWith,
    AtLeast,
    AtMost,
}

impl MatchStrategy {
    pub fn matches(&self, cell: &Value, selected: &str) -> bool {
        let cell_text = stringify(cell);

        match self {
            MatchStrategy::Exact => cell_text == selected,
            MatchStrategy::IgnoreCase => cell_text.to_lowercase() == selected.to_lowercase(),
            MatchStrategy::Contains => cell_text.to_lowercase().contains(&selected.to_lowercase()),
            MatchStrategy::StartsWith => cell_text.to_lowercase().starts_with(&selected.to_lowercase()),
            MatchStrategy::AtLeast | MatchStrategy::AtMost => {
                let cell_num = as_number(cell).or_else(|| cell_text.parse::<f64>().ok());
                match (cell_num, selected.parse::<f64>()) {
                    (Some(a), Ok(b)) if *self == MatchStrategy::AtLeast => a >= b,
                    (Some(a), Ok(b)) => a <= b,
                    // Non-numeric cells never satisfy a numeric threshold
                    _ => false,
                }
            }
        }
    }
}

/// The closed set of cell presentations, plus an escape hatch.
#[derive(Clone, Default)]
pub enum CellKind {
    #[default]
    Text,
    Badge(Vec<(String, Variant)>),
    Currency { symbol: String },
    Percent,
    Link,
    Date { format: String },
    Custom(RenderFn),
}

impl fmt::Debug for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Text => write!(f, "Text"),
            CellKind::Badge(tones) => f.debug_tuple("Badge").field(tones).finish(),
            CellKind::Currency { symbol } => f.debug_struct("Currency").field("symbol", symbol).finish(),
            CellKind::Percent => write!(f, "Percent"),
            CellKind::Link => write!(f, "Link"),
            CellKind::Date { format } => f.debug_struct("Date").field("format", format).finish(),
            CellKind::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// How a rendered cell should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Text,
    Badge(Variant),
    Numeric,
    Link,
}

impl CellKind {
    /// Formats a cell. Errors are handled by the renderer, which falls back to the raw value.
    pub fn format(&self, value: &Value, row: &Row) -> Result<(String, CellStyle), RenderError> {
        match self {
            CellKind::Text => Ok((stringify(value), CellStyle::Text)),
            CellKind::Badge(tones) => {
                let text = stringify(value);
                let variant = tones
                    .iter()
                    .find(|(v, _)| v.eq_ignore_ascii_case(&text))
                    .map(|(_, variant)| *variant)
                    .unwrap_or_default();
                Ok((text, CellStyle::Badge(variant)))
            }
            CellKind::Currency { symbol } => {
                let amount = number_of(value)?;
                Ok((format_currency(symbol, amount), CellStyle::Numeric))
            }
            CellKind::Percent => {
                let amount = number_of(value)?;
                Ok((format!("{}%", trim_decimals(amount)), CellStyle::Numeric))
            }
            CellKind::Link => Ok((stringify(value), CellStyle::Link)),
            CellKind::Date { format } => {
                let text = stringify(value);
                let date = chrono::NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|e| {
                    RenderError::BadDate {
                        value: text.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Ok((date.format(format).to_string(), CellStyle::Text))
            }
            CellKind::Custom(render) => {
                // A panicking formatter costs one cell, not the whole frame
                let text = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| render(value, row)))
                    .map_err(|payload| {
                        RenderError::custom(format!("render panicked: {}", panic_message(payload.as_ref())))
                    })??;
                Ok((text, CellStyle::Text))
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

fn number_of(value: &Value) -> Result<f64, RenderError> {
    as_number(value)
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
        .ok_or_else(|| RenderError::NotANumber(stringify(value)))
}

fn trim_decimals(amount: f64) -> String {
    let text = format!("{:.2}", amount);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `$1,234.50` style formatting with thousands separators.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, cents)
}

/// Declarative description of one displayed field.
#[derive(Debug, Clone)]
pub struct Column {
    pub key: String,
    pub header: String,
    pub sortable: bool,
    pub searchable: bool,
    pub filterable: bool,
    pub filter_options: Vec<FilterOption>,
    pub match_strategy: MatchStrategy,
    pub kind: CellKind,
}

impl Column {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            searchable: false,
            filterable: false,
            filter_options: Vec::new(),
            match_strategy: MatchStrategy::Exact,
            kind: CellKind::Text,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn filter(mut self, options: Vec<FilterOption>) -> Self {
        self.filterable = true;
        self.filter_options = options;
        self
    }

    pub fn matching(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = strategy;
        self
    }

    pub fn kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    /// A filterable column only gets a filter control when it has something to offer.
    pub fn has_filter_control(&self) -> bool {
        self.filterable && !self.filter_options.is_empty()
    }
}

/// Checks a column set for configuration problems without rejecting it.
pub fn validate_columns(columns: &[Column]) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, column) in columns.iter().enumerate() {
        if column.key.trim().is_empty() {
            issues.push(ConfigIssue::EmptyKey { index });
        } else if !seen.insert(column.key.as_str()) {
            issues.push(ConfigIssue::DuplicateKey {
                key: column.key.clone(),
            });
        }

        if column.filterable && column.filter_options.is_empty() {
            issues.push(ConfigIssue::FilterWithoutOptions {
                key: column.key.clone(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_currency_formatting() {
        assert_eq!(format_currency("$", 1234.5), "$1,234.50");
        assert_eq!(format_currency("$", 999.0), "$999.00");
        assert_eq!(format_currency("€", 1_000_000.0), "€1,000,000.00");
        assert_eq!(format_currency("$", -42.5), "-$42.50");
    }

    #[test]
    fn test_currency_on_text_is_an_error() {
        let kind = CellKind::Currency { symbol: "$".to_string() };
        let result = kind.format(&json!("n/a"), &Row::new());
        assert_eq!(result, Err(RenderError::NotANumber("n/a".to_string())));
    }

    #[test]
    fn test_badge_picks_tone_case_insensitively() {
        let kind = CellKind::Badge(vec![("active".to_string(), Variant::Success)]);
        let (text, style) = kind.format(&json!("Active"), &Row::new()).unwrap();
        assert_eq!(text, "Active");
        assert_eq!(style, CellStyle::Badge(Variant::Success));

        let (_, style) = kind.format(&json!("Unknown"), &Row::new()).unwrap();
        assert_eq!(style, CellStyle::Badge(Variant::Default));
    }

    #[test]
    fn test_date_reformatting() {
        let kind = CellKind::Date { format: "%b %d, %Y".to_string() };
        let (text, _) = kind.format(&json!("2024-03-05"), &Row::new()).unwrap();
        assert_eq!(text, "Mar 05, 2024");
        assert!(kind.format(&json!("yesterday"), &Row::new()).is_err());
    }

    #[test]
    fn test_percent_trims_trailing_zeros() {
        let (text, _) = CellKind::Percent.format(&json!(12.5), &Row::new()).unwrap();
        assert_eq!(text, "12.5%");
        let (text, _) = CellKind::Percent.format(&json!(40), &Row::new()).unwrap();
        assert_eq!(text, "40%");
    }

    #[test]
    fn test_match_strategies() {
        assert!(MatchStrategy::Exact.matches(&json!("Active"), "Active"));
        assert!(!MatchStrategy::Exact.matches(&json!("Active"), "active"));
        assert!(MatchStrategy::IgnoreCase.matches(&json!("Active"), "active"));
        assert!(MatchStrategy::Exact.matches(&json!(3), "3"));
        assert!(MatchStrategy::Contains.matches(&json!("North East"), "east"));
        assert!(MatchStrategy::StartsWith.matches(&json!("PO-2024-001"), "po-2024"));
        assert!(MatchStrategy::AtLeast.matches(&json!(15000), "10000"));
        assert!(!MatchStrategy::AtLeast.matches(&json!(5000), "10000"));
        assert!(MatchStrategy::AtMost.matches(&json!("5000"), "10000"));
        assert!(!MatchStrategy::AtMost.matches(&json!("n/a"), "10000"));
    }

    #[test]
    fn test_validate_columns_reports_issues() {
        let columns = vec![
            Column::new("id", "ID"),
            Column::new("id", "Duplicate"),
            Column::new("", "Blank"),
            Column::new("status", "Status").filter(vec![]),
        ];

        let issues = validate_columns(&columns);
        assert_eq!(
            issues,
            vec![
                ConfigIssue::DuplicateKey { key: "id".to_string() },
                ConfigIssue::EmptyKey { index: 2 },
                ConfigIssue::FilterWithoutOptions { key: "status".to_string() },
            ]
        );
        assert!(!columns[3].has_filter_control());
    }
}
