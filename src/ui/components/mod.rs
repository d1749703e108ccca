mod confirm_dialog;
mod data_grid;
mod grid_toolbar;
mod menu_bar;
mod page_nav;
mod pagination;
mod settings_dialog;
mod status_bar;
mod toasts;

pub use confirm_dialog::{ConfirmDialog, ConfirmDialogEvent};
pub use data_grid::DataGrid;
pub use grid_toolbar::GridToolbar;
pub use menu_bar::{MenuBar, MenuBarEvent};
pub use page_nav::{PageNav, PageNavEvent};
pub use pagination::PaginationControls;
pub use settings_dialog::{SettingsDialog, SettingsDialogEvent};
pub use status_bar::StatusBar;
pub use toasts::ToastStack;
