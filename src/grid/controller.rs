use crate::grid::action::{dispatch, validate_actions, Action};
use crate::grid::column::{validate_columns, Column};
use crate::grid::export::{export_csv, CsvExport, ExportMode};
use crate::grid::filter::filter_and_search;
use crate::grid::render::{render, RenderInput, RenderModel};
use crate::grid::sort::sort_rows;
use crate::grid::value::Row;
use crate::grid::view_state::{FilterSelection, SortCycle, ViewState};
use std::sync::Arc;

/// Everything a page hands the grid besides its rows.
pub struct GridConfig<M> {
    pub columns: Vec<Column>,
    pub actions: Vec<Action<M>>,
    pub search_placeholder: String,
    pub exportable: bool,
    on_refresh: Option<Arc<dyn Fn() -> M + Send + Sync>>,
}

impl<M> GridConfig<M> {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            actions: Vec::new(),
            search_placeholder: "Search...".to_string(),
            exportable: false,
            on_refresh: None,
        }
    }

    pub fn actions(mut self, actions: Vec<Action<M>>) -> Self {
        self.actions = actions;
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn exportable(mut self) -> Self {
        self.exportable = true;
        self
    }

    pub fn on_refresh(mut self, refresh: impl Fn() -> M + Send + Sync + 'static) -> Self {
        self.on_refresh = Some(Arc::new(refresh));
        self
    }

    pub fn refreshable(&self) -> bool {
        self.on_refresh.is_some()
    }

    /// Logs every configuration problem. The grid keeps working either way.
    pub fn report_issues(&self) -> usize {
        let issues: Vec<_> = validate_columns(&self.columns)
            .into_iter()
            .chain(validate_actions(&self.actions))
            .collect();
        for issue in &issues {
            tracing::warn!(%issue, "grid configuration issue");
        }
        issues.len()
    }
}

/// User input the grid reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    SearchChanged(String),
    FilterSelected { key: String, value: String },
    FiltersCleared,
    HeaderClicked(String),
    PageChanged(usize),
    PageSizeChanged(usize),
    ExportClicked,
    RefreshClicked,
    ActionClicked { action: usize, row: usize },
}

#[derive(Debug)]
pub enum GridOutcome<M> {
    /// View state changed; the next render reflects it.
    Updated,
    /// Nothing to do, e.g. a click on a non-sortable header.
    Ignored,
    Export(CsvExport),
    /// Message produced by a caller callback.
    Message(M),
}

/// Owns the transient view state of one mounted grid.
#[derive(Debug, Clone)]
pub struct GridController {
    view: ViewState,
    cycle: SortCycle,
    export_mode: ExportMode,
    schema: Vec<String>,
}

impl GridController {
    pub fn new(cycle: SortCycle, page_size: Option<usize>) -> Self {
        let view = match page_size {
            Some(size) => ViewState::paged(size),
            None => ViewState::default(),
        };
        Self {
            view,
            cycle,
            export_mode: ExportMode::Raw,
            schema: Vec::new(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_sort_cycle(&mut self, cycle: SortCycle) {
        self.cycle = cycle;
    }

    pub fn set_export_mode(&mut self, mode: ExportMode) {
        self.export_mode = mode;
    }

    /// Applies a user event. Rows are always read fresh from the caller.
    pub fn handle<M>(&mut self, event: GridEvent, config: &GridConfig<M>, rows: &[Row]) -> GridOutcome<M> {
        self.reconcile(&config.columns);

        let next = match event {
            GridEvent::SearchChanged(term) => self.view.with_search(&term),
            GridEvent::FilterSelected { key, value } => {
                if !config.columns.iter().any(|c| c.key == key && c.filterable) {
                    tracing::warn!(%key, "filter selected on a column that is not filterable");
                    return GridOutcome::Ignored;
                }
                // The reserved "all" value removes the filter
                self.view.with_filter(&key, FilterSelection::from_ui(&value))
            }
            GridEvent::FiltersCleared => self.view.without_filters(),
            GridEvent::HeaderClicked(key) => {
                if !config.columns.iter().any(|c| c.key == key && c.sortable) {
                    return GridOutcome::Ignored;
                }
                self.view.with_sort_click(&key, self.cycle)
            }
            GridEvent::PageChanged(index) => self.view.with_page(index),
            GridEvent::PageSizeChanged(size) => self.view.with_page_size(size),
            GridEvent::ExportClicked => {
                if !config.exportable {
                    return GridOutcome::Ignored;
                }
                let ordered = self.derive(&config.columns, rows);
                let export = export_csv(&config.columns, rows, &ordered, self.export_mode);
                tracing::info!(rows = export.row_count, "exported grid view");
                return GridOutcome::Export(export);
            }
            GridEvent::RefreshClicked => {
                return match &config.on_refresh {
                    Some(refresh) => GridOutcome::Message(refresh()),
                    None => GridOutcome::Ignored,
                };
            }
            GridEvent::ActionClicked { action, row } => {
                return match dispatch(&config.actions, rows, action, row) {
                    Some(message) => GridOutcome::Message(message),
                    None => {
                        tracing::warn!(action, row, "action click on a stale row");
                        GridOutcome::Ignored
                    }
                };
            }
        };

        if next == self.view {
            return GridOutcome::Ignored;
        }

        tracing::debug!(
            search = %next.search,
            filters = next.filters.len(),
            sort = ?next.sort.key,
            "grid view updated"
        );
        self.view = next;
        GridOutcome::Updated
    }

    /// Filter, then search, then sort.
    pub fn derive(&self, columns: &[Column], rows: &[Row]) -> Vec<usize> {
        let visible = filter_and_search(rows, columns, &self.view.filters, &self.view.search);
        sort_rows(rows, visible, &self.view.sort)
    }

    pub fn render<M>(&mut self, config: &GridConfig<M>, rows: &[Row]) -> RenderModel {
        self.reconcile(&config.columns);
        let ordered = self.derive(&config.columns, rows);

        render(RenderInput {
            columns: &config.columns,
            actions: &config.actions,
            rows,
            ordered: &ordered,
            view: &self.view,
            search_placeholder: &config.search_placeholder,
            exportable: config.exportable,
            refreshable: config.refreshable(),
        })
    }

    /// Forgets filter and sort state for columns the caller removed.
    fn reconcile(&mut self, columns: &[Column]) {
        if self.schema.len() == columns.len() && self.schema.iter().zip(columns).all(|(k, c)| *k == c.key) {
            return;
        }

        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        let pruned = self.view.retain_keys(&keys);
        if pruned != self.view {
            tracing::debug!("column set changed, dropping stale filter and sort state");
        }
        self.view = pruned;
        self.schema = columns.iter().map(|c| c.key.clone()).collect();
    }
}
