use thiserror::Error;

/// A cell that could not be rendered by its column's cell kind.
/// The grid falls back to the raw value and carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("expected a number, got {0:?}")]
    NotANumber(String),

    #[error("unparsable date {value:?}: {reason}")]
    BadDate { value: String, reason: String },

    #[error("{0}")]
    Custom(String),
}

impl RenderError {
    pub fn custom(message: impl Into<String>) -> Self {
        RenderError::Custom(message.into())
    }
}

/// Problems in a caller-supplied grid configuration. None of them are fatal:
/// the affected control is skipped and the issue is logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigIssue {
    #[error("column #{index} has an empty key")]
    EmptyKey { index: usize },

    #[error("duplicate column key '{key}'")]
    DuplicateKey { key: String },

    #[error("column '{key}' is filterable but has no filter options")]
    FilterWithoutOptions { key: String },

    #[error("duplicate action id '{id}'")]
    DuplicateAction { id: String },
}
