use crate::grid::{stringify, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// What a page's row actions and refresh button ask the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PageMessage {
    Notify { level: ToastLevel, text: String },
    ConfirmDelete { id: String, label: String },
    Duplicate { id: String },
    Refresh,
}

impl PageMessage {
    pub fn info(text: impl Into<String>) -> Self {
        PageMessage::Notify {
            level: ToastLevel::Info,
            text: text.into(),
        }
    }
}

/// Reads the identifying field of a row for messages.
pub fn row_id(row: &Row, id_key: &str) -> String {
    row.get(id_key).map(stringify).unwrap_or_default()
}
