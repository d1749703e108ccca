//! Column-configured data grid: filtering, search, sorting, row actions and CSV export
//! over rows owned by the caller. Nothing here knows about egui.

mod action;
mod column;
mod controller;
mod error;
mod export;
mod filter;
mod render;
mod sort;
mod value;
mod view_state;

pub use action::Action;
pub use column::{CellKind, CellStyle, Column, FilterOption, MatchStrategy, Variant};
pub use controller::{GridConfig, GridController, GridEvent, GridOutcome};
pub use error::RenderError;
pub use export::{CsvExport, ExportMode};
pub use render::{CellFallback, PageWindow, RenderModel, Toolbar};
pub use value::{stringify, Row};
pub use view_state::{SortCycle, ALL_FILTER};
