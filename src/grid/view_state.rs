use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved filter value meaning "no filter on this column".
pub const ALL_FILTER: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// What a repeated click on the same sort header does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortCycle {
    /// ascending, descending, ascending, ...
    #[default]
    Toggle,
    /// ascending, descending, unsorted, ...
    TriState,
}

impl SortCycle {
    pub fn as_str(&self) -> &str {
        match self {
            SortCycle::Toggle => "Ascending / descending",
            SortCycle::TriState => "Ascending / descending / off",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        (self.key.as_deref() == Some(key)).then_some(self.direction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub index: usize,
    pub size: usize,
}

/// A filter control's selection, after the reserved "all" value has been mapped away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    All,
    Value(String),
}

impl FilterSelection {
    pub fn from_ui(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_FILTER) {
            FilterSelection::All
        } else {
            FilterSelection::Value(value.to_string())
        }
    }
}

/// Transient grid view state. Every transition returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub sort: SortState,
    pub page: Option<PageCursor>,
}

impl ViewState {
    pub fn paged(size: usize) -> Self {
        Self {
            page: Some(PageCursor { index: 0, size: size.max(1) }),
            ..Self::default()
        }
    }

    pub fn with_search(&self, term: &str) -> Self {
        Self {
            search: term.to_string(),
            page: self.first_page(),
            ..self.clone()
        }
    }

    pub fn with_filter(&self, key: &str, selection: FilterSelection) -> Self {
        let mut filters = self.filters.clone();
        match selection {
            FilterSelection::All => {
                filters.remove(key);
            }
            FilterSelection::Value(value) => {
                filters.insert(key.to_string(), value);
            }
        }

        Self {
            filters,
            page: self.first_page(),
            ..self.clone()
        }
    }

    pub fn without_filters(&self) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            page: self.first_page(),
            ..self.clone()
        }
    }

    /// Header click: a new key starts ascending, the same key follows `cycle`.
    pub fn with_sort_click(&self, key: &str, cycle: SortCycle) -> Self {
        let sort = match (self.sort.direction_for(key), cycle) {
            (None, _) => SortState::by(key, SortDirection::Ascending),
            (Some(SortDirection::Ascending), _) => SortState::by(key, SortDirection::Descending),
            (Some(SortDirection::Descending), SortCycle::Toggle) => SortState::by(key, SortDirection::Ascending),
            (Some(SortDirection::Descending), SortCycle::TriState) => SortState::default(),
        };

        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_page(&self, index: usize) -> Self {
        Self {
            page: self.page.map(|p| PageCursor { index, ..p }),
            ..self.clone()
        }
    }

    pub fn with_page_size(&self, size: usize) -> Self {
        Self {
            page: Some(PageCursor { index: 0, size: size.max(1) }),
            ..self.clone()
        }
    }

    /// Drops filter and sort entries that point at keys no longer in the schema.
    pub fn retain_keys(&self, keys: &[&str]) -> Self {
        let filters = self
            .filters
            .iter()
            .filter(|(k, _)| keys.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let sort = match &self.sort.key {
            Some(key) if !keys.contains(&key.as_str()) => SortState::default(),
            _ => self.sort.clone(),
        };

        Self {
            filters,
            sort,
            ..self.clone()
        }
    }

    pub fn selected_filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(|s| s.as_str())
    }

    fn first_page(&self) -> Option<PageCursor> {
        self.page.map(|p| PageCursor { index: 0, ..p })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_toggle_cycle() {
        let view = ViewState::default();

        let first = view.with_sort_click("totalValue", SortCycle::Toggle);
        assert_eq!(first.sort, SortState::by("totalValue", SortDirection::Ascending));

        let second = first.with_sort_click("totalValue", SortCycle::Toggle);
        assert_eq!(second.sort, SortState::by("totalValue", SortDirection::Descending));

        let third = second.with_sort_click("totalValue", SortCycle::Toggle);
        assert_eq!(third.sort, SortState::by("totalValue", SortDirection::Ascending));
    }

    #[test]
    fn test_sort_tri_state_cycle() {
        let view = ViewState::default()
            .with_sort_click("supplier", SortCycle::TriState)
            .with_sort_click("supplier", SortCycle::TriState)
            .with_sort_click("supplier", SortCycle::TriState);
        assert_eq!(view.sort, SortState::default());
    }

    #[test]
    fn test_new_sort_key_starts_ascending() {
        let view = ViewState::default()
            .with_sort_click("supplier", SortCycle::Toggle)
            .with_sort_click("supplier", SortCycle::Toggle)
            .with_sort_click("status", SortCycle::Toggle);
        assert_eq!(view.sort, SortState::by("status", SortDirection::Ascending));
    }

    #[test]
    fn test_transitions_leave_original_untouched() {
        let view = ViewState::default();
        let searched = view.with_search("dell");
        assert_eq!(view.search, "");
        assert_eq!(searched.search, "dell");
    }

    #[test]
    fn test_all_selection_removes_filter() {
        let view = ViewState::default()
            .with_filter("status", FilterSelection::from_ui("Active"))
            .with_filter("status", FilterSelection::from_ui("all"));
        assert!(view.filters.is_empty());
    }

    #[test]
    fn test_search_and_filter_reset_page() {
        let view = ViewState::paged(10).with_page(3);
        assert_eq!(view.with_search("x").page.map(|p| p.index), Some(0));
        assert_eq!(
            view.with_filter("status", FilterSelection::Value("Active".to_string()))
                .page
                .map(|p| p.index),
            Some(0)
        );
        // Sorting keeps the current page
        assert_eq!(
            view.with_sort_click("id", SortCycle::Toggle).page.map(|p| p.index),
            Some(3)
        );
    }

    #[test]
    fn test_unpaged_view_ignores_page_changes() {
        let view = ViewState::default().with_page(4);
        assert_eq!(view.page, None);
    }

    #[test]
    fn test_retain_keys_prunes_removed_columns() {
        let view = ViewState::default()
            .with_filter("status", FilterSelection::Value("Active".to_string()))
            .with_filter("region", FilterSelection::Value("West".to_string()))
            .with_sort_click("region", SortCycle::Toggle);

        let pruned = view.retain_keys(&["status", "supplier"]);
        assert_eq!(pruned.selected_filter("status"), Some("Active"));
        assert_eq!(pruned.selected_filter("region"), None);
        assert_eq!(pruned.sort, SortState::default());
    }
}
