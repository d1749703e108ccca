use crate::grid::action::Action;
use crate::grid::column::{CellStyle, Column, FilterOption, Variant};
use crate::grid::value::{field, stringify, Row};
use crate::grid::view_state::{SortDirection, ViewState};

#[derive(Debug, Clone, PartialEq)]
pub struct FilterControl {
    pub key: String,
    pub header: String,
    pub options: Vec<FilterOption>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toolbar {
    pub search_placeholder: String,
    pub search: String,
    pub filters: Vec<FilterControl>,
    pub active_filters: usize,
    pub exportable: bool,
    pub refreshable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub sorted: Option<SortDirection>,
}

impl HeaderCell {
    pub fn text(&self) -> String {
        match self.sorted {
            Some(direction) => format!("{} {}", self.label, direction.indicator()),
            None => self.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub text: String,
    pub style: CellStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionButton {
    pub index: usize,
    pub label: String,
    pub icon: String,
    pub variant: Variant,
}

impl ActionButton {
    pub fn text(&self) -> String {
        if self.icon.is_empty() {
            self.label.clone()
        } else {
            format!("{} {}", self.icon, self.label)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
    /// Index into the caller's rows, used when dispatching actions.
    pub source: usize,
    pub cells: Vec<CellView>,
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoColumns,
    NoRows,
    NoMatches,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoColumns => "No columns configured",
            EmptyState::NoRows => "No records yet",
            EmptyState::NoMatches => "No records match the current search or filters",
        }
    }
}

/// A cell whose kind failed and was shown as raw text instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellFallback {
    pub column: String,
    pub row: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub index: usize,
    pub size: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub toolbar: Toolbar,
    pub headers: Vec<HeaderCell>,
    pub body: Vec<BodyRow>,
    pub empty: Option<EmptyState>,
    pub total_rows: usize,
    pub visible_rows: usize,
    pub page: Option<PageWindow>,
    pub fallbacks: Vec<CellFallback>,
}

pub struct RenderInput<'a, M> {
    pub columns: &'a [Column],
    pub actions: &'a [Action<M>],
    pub rows: &'a [Row],
    pub ordered: &'a [usize],
    pub view: &'a ViewState,
    pub search_placeholder: &'a str,
    pub exportable: bool,
    pub refreshable: bool,
}

/// Projects columns, ordered rows and actions into a paintable model.
pub fn render<M>(input: RenderInput<'_, M>) -> RenderModel {
    let RenderInput {
        columns,
        actions,
        rows,
        ordered,
        view,
        search_placeholder,
        exportable,
        refreshable,
    } = input;

    let filters: Vec<FilterControl> = columns
        .iter()
        .filter(|c| c.has_filter_control())
        .map(|c| FilterControl {
            key: c.key.clone(),
            header: c.header.clone(),
            options: c.filter_options.clone(),
            selected: view.selected_filter(&c.key).map(str::to_string),
        })
        .collect();

    let toolbar = Toolbar {
        search_placeholder: search_placeholder.to_string(),
        search: view.search.clone(),
        active_filters: filters.iter().filter(|f| f.selected.is_some()).count(),
        filters,
        exportable,
        refreshable,
    };

    let headers = columns
        .iter()
        .map(|c| HeaderCell {
            key: c.key.clone(),
            label: c.header.clone(),
            sortable: c.sortable,
            sorted: if c.sortable { view.sort.direction_for(&c.key) } else { None },
        })
        .collect();

    let page = view.page.map(|cursor| {
        let total_pages = ordered.len().div_ceil(cursor.size).max(1);
        let index = cursor.index.min(total_pages - 1);
        let start = (index * cursor.size).min(ordered.len());
        let end = start.saturating_add(cursor.size).min(ordered.len());
        PageWindow {
            index,
            size: cursor.size,
            total_pages,
            start,
            end,
        }
    });

    let window = match &page {
        Some(p) => &ordered[p.start..p.end],
        None => ordered,
    };

    let buttons: Vec<ActionButton> = actions
        .iter()
        .enumerate()
        .map(|(index, a)| ActionButton {
            index,
            label: a.label.clone(),
            icon: a.icon.clone(),
            variant: a.variant,
        })
        .collect();

    let mut fallbacks = Vec::new();
    let body = window
        .iter()
        .filter_map(|&source| rows.get(source).map(|row| (source, row)))
        .map(|(source, row)| BodyRow {
            source,
            cells: columns
                .iter()
                .map(|c| render_cell(c, row, source, &mut fallbacks))
                .collect(),
            actions: buttons.clone(),
        })
        .collect();

    let empty = if columns.is_empty() {
        Some(EmptyState::NoColumns)
    } else if rows.is_empty() {
        Some(EmptyState::NoRows)
    } else if ordered.is_empty() {
        Some(EmptyState::NoMatches)
    } else {
        None
    };

    RenderModel {
        toolbar,
        headers,
        body,
        empty,
        total_rows: rows.len(),
        visible_rows: ordered.len(),
        page,
        fallbacks,
    }
}

fn render_cell(column: &Column, row: &Row, source: usize, fallbacks: &mut Vec<CellFallback>) -> CellView {
    let value = field(row, &column.key);
    match column.kind.format(value, row) {
        Ok((text, style)) => CellView { text, style },
        Err(e) => {
            fallbacks.push(CellFallback {
                column: column.key.clone(),
                row: source,
                reason: e.to_string(),
            });
            CellView {
                text: stringify(value),
                style: CellStyle::Text,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::column::CellKind;
    use crate::grid::error::RenderError;
    use crate::grid::view_state::{FilterSelection, SortCycle};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn record(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => Row::new(),
        }
    }

    fn render_all(columns: &[Column], actions: &[Action<()>], rows: &[Row], view: &ViewState) -> RenderModel {
        let ordered: Vec<usize> = (0..rows.len()).collect();
        render(RenderInput {
            columns,
            actions,
            rows,
            ordered: &ordered,
            view,
            search_placeholder: "Search...",
            exportable: true,
            refreshable: false,
        })
    }

    #[test]
    fn test_cells_follow_column_order() {
        let columns = vec![Column::new("b", "B"), Column::new("a", "A")];
        let rows = vec![record(json!({"a": 1, "b": 2}))];
        let model = render_all(&columns, &[], &rows, &ViewState::default());

        let texts: Vec<&str> = model.body[0].cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["2", "1"]);
        assert_eq!(model.empty, None);
    }

    #[test]
    fn test_failing_render_falls_back_to_raw_value() {
        let exploding = CellKind::Custom(Arc::new(|_: &Value, _: &Row| -> Result<String, RenderError> {
            Err(RenderError::custom("boom"))
        }));
        let columns = vec![
            Column::new("id", "ID"),
            Column::new("amount", "Amount").kind(exploding),
        ];
        let rows = vec![record(json!({"id": "PO-1", "amount": 99}))];
        let model = render_all(&columns, &[], &rows, &ViewState::default());

        assert_eq!(model.body[0].cells[0].text, "PO-1");
        assert_eq!(model.body[0].cells[1].text, "99");
        assert_eq!(
            model.fallbacks,
            vec![CellFallback {
                column: "amount".to_string(),
                row: 0,
                reason: "boom".to_string()
            }]
        );
    }

    #[test]
    fn test_panicking_render_costs_only_its_cell() {
        let tags = CellKind::Custom(Arc::new(|v: &Value, _: &Row| -> Result<String, RenderError> {
            let tags = v.as_array().unwrap();
            Ok(format!("{} tags", tags.len()))
        }));
        let columns = vec![Column::new("id", "ID"), Column::new("tags", "Tags").kind(tags)];
        let rows = vec![
            record(json!({"id": "C-1", "tags": ["a", "b"]})),
            record(json!({"id": "C-2"})),
        ];
        let model = render_all(&columns, &[], &rows, &ViewState::default());

        assert_eq!(model.body.len(), 2);
        assert_eq!(model.body[0].cells[1].text, "2 tags");
        assert_eq!(model.body[1].cells[0].text, "C-2");
        assert_eq!(model.body[1].cells[1].text, "");
        assert_eq!(model.fallbacks.len(), 1);
        assert_eq!(model.fallbacks[0].column, "tags");
        assert_eq!(model.fallbacks[0].row, 1);
        assert!(model.fallbacks[0].reason.starts_with("render panicked"));
    }

    #[test]
    fn test_empty_states() {
        let columns = vec![Column::new("id", "ID")];

        let no_rows = render_all(&columns, &[], &[], &ViewState::default());
        assert_eq!(no_rows.empty, Some(EmptyState::NoRows));
        assert!(no_rows.body.is_empty());

        let no_columns = render_all(&[], &[], &[record(json!({"id": 1}))], &ViewState::default());
        assert_eq!(no_columns.empty, Some(EmptyState::NoColumns));

        let rows = vec![record(json!({"id": 1}))];
        let no_matches = render(RenderInput::<()> {
            columns: &columns,
            actions: &[],
            rows: &rows,
            ordered: &[],
            view: &ViewState::default(),
            search_placeholder: "",
            exportable: false,
            refreshable: false,
        });
        assert_eq!(no_matches.empty, Some(EmptyState::NoMatches));
    }

    #[test]
    fn test_header_indicator_only_on_sorted_sortable_column() {
        let columns = vec![
            Column::new("total", "Total").sortable(),
            Column::new("notes", "Notes"),
        ];
        let view = ViewState::default().with_sort_click("total", SortCycle::Toggle);
        let model = render_all(&columns, &[], &[], &view);

        assert_eq!(model.headers[0].text(), "Total ▲");
        assert_eq!(model.headers[1].text(), "Notes");
    }

    #[test]
    fn test_filter_controls_skip_columns_without_options() {
        let columns = vec![
            Column::new("status", "Status").filter(vec![FilterOption::new("Active", "Active")]),
            Column::new("region", "Region").filter(vec![]),
        ];
        let view = ViewState::default().with_filter("status", FilterSelection::Value("Active".to_string()));
        let model = render_all(&columns, &[], &[], &view);

        assert_eq!(model.toolbar.filters.len(), 1);
        assert_eq!(model.toolbar.filters[0].selected.as_deref(), Some("Active"));
        assert_eq!(model.toolbar.active_filters, 1);
    }

    #[test]
    fn test_actions_render_in_declaration_order() {
        let actions = vec![
            Action::new("view", "View", |_: &Row| ()).icon("👁"),
            Action::new("delete", "Delete", |_: &Row| ()).variant(Variant::Destructive),
        ];
        let rows = vec![record(json!({"id": 1}))];
        let model = render_all(&[Column::new("id", "ID")], &actions, &rows, &ViewState::default());

        let labels: Vec<String> = model.body[0].actions.iter().map(|a| a.text()).collect();
        assert_eq!(labels, vec!["👁 View".to_string(), "Delete".to_string()]);
        assert_eq!(model.body[0].actions[1].variant, Variant::Destructive);
    }

    #[test]
    fn test_page_window_is_clamped() {
        let rows: Vec<Row> = (0..25).map(|i| record(json!({"id": i}))).collect();
        let view = ViewState::paged(10).with_page(7);
        let model = render_all(&[Column::new("id", "ID")], &[], &rows, &view);

        let page = model.page.unwrap();
        assert_eq!(page.index, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!((page.start, page.end), (20, 25));
        assert_eq!(model.body.len(), 5);
        assert_eq!(model.body[0].source, 20);
        assert_eq!(model.visible_rows, 25);
    }

    #[test]
    fn test_huge_page_size_shows_everything() {
        let rows: Vec<Row> = (0..3).map(|i| record(json!({"id": i}))).collect();
        let view = ViewState::default().with_page_size(usize::MAX);
        let model = render_all(&[Column::new("id", "ID")], &[], &rows, &view);

        let page = model.page.unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!((page.start, page.end), (0, 3));
        assert_eq!(model.body.len(), 3);
    }
}
