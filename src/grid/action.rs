use crate::grid::column::Variant;
use crate::grid::error::ConfigIssue;
use crate::grid::value::Row;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Row callback. It returns a message for the caller instead of performing the effect itself.
pub type ActionFn<M> = Arc<dyn Fn(&Row) -> M + Send + Sync>;

/// A row-scoped operation rendered as one button per row.
pub struct Action<M> {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub variant: Variant,
    on_click: ActionFn<M>,
}

impl<M> Action<M> {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        on_click: impl Fn(&Row) -> M + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: String::new(),
            variant: Variant::Default,
            on_click: Arc::new(on_click),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Invokes the callback once with the clicked row.
    pub fn invoke(&self, row: &Row) -> M {
        (self.on_click)(row)
    }
}

impl<M> Clone for Action<M> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            variant: self.variant,
            on_click: Arc::clone(&self.on_click),
        }
    }
}

impl<M> fmt::Debug for Action<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// Looks up the action at `action` and fires it for `rows[row]`.
/// Stale indices (the rows changed under the click) dispatch nothing.
pub fn dispatch<M>(actions: &[Action<M>], rows: &[Row], action: usize, row: usize) -> Option<M> {
    let action = actions.get(action)?;
    let record = rows.get(row)?;
    tracing::debug!(action = %action.id, row, "dispatching row action");
    Some(action.invoke(record))
}

pub fn validate_actions<M>(actions: &[Action<M>]) -> Vec<ConfigIssue> {
    let mut seen = HashSet::new();
    actions
        .iter()
        .filter(|a| !seen.insert(a.id.as_str()))
        .map(|a| ConfigIssue::DuplicateAction { id: a.id.clone() })
        .collect()
}
