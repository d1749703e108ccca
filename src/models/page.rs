use crate::grid::{Action, GridConfig, GridController, Row, SortCycle, Variant};
use crate::models::message::row_id;
use crate::models::pages;
use crate::models::PageMessage;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    PurchaseOrders,
    Suppliers,
    Invoices,
    Contracts,
    Customers,
    Territories,
}

impl PageKind {
    pub fn all() -> [PageKind; 6] {
        [
            PageKind::PurchaseOrders,
            PageKind::Suppliers,
            PageKind::Invoices,
            PageKind::Contracts,
            PageKind::Customers,
            PageKind::Territories,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageKind::PurchaseOrders => "Purchase Orders",
            PageKind::Suppliers => "Suppliers",
            PageKind::Invoices => "Invoices",
            PageKind::Contracts => "Contracts",
            PageKind::Customers => "Customers",
            PageKind::Territories => "Territories",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PageKind::PurchaseOrders => "🛒",
            PageKind::Suppliers => "🏭",
            PageKind::Invoices => "🧾",
            PageKind::Contracts => "📄",
            PageKind::Customers => "👥",
            PageKind::Territories => "🗺",
        }
    }

    /// File name stem used for CSV exports of this page.
    pub fn export_name(&self) -> &'static str {
        match self {
            PageKind::PurchaseOrders => "purchase-orders",
            PageKind::Suppliers => "suppliers",
            PageKind::Invoices => "invoices",
            PageKind::Contracts => "contracts",
            PageKind::Customers => "customers",
            PageKind::Territories => "territories",
        }
    }

    pub fn sample_rows(&self) -> Vec<Row> {
        match self {
            PageKind::PurchaseOrders => pages::purchase_orders::rows(),
            PageKind::Suppliers => pages::suppliers::rows(),
            PageKind::Invoices => pages::invoices::rows(),
            PageKind::Contracts => pages::contracts::rows(),
            PageKind::Customers => pages::customers::rows(),
            PageKind::Territories => pages::territories::rows(),
        }
    }

    fn grid(&self) -> GridConfig<PageMessage> {
        match self {
            PageKind::PurchaseOrders => pages::purchase_orders::grid(),
            PageKind::Suppliers => pages::suppliers::grid(),
            PageKind::Invoices => pages::invoices::grid(),
            PageKind::Contracts => pages::contracts::grid(),
            PageKind::Customers => pages::customers::grid(),
            PageKind::Territories => pages::territories::grid(),
        }
    }
}

/// One mounted ERP page: the rows it owns plus the grid showing them.
pub struct Page {
    pub kind: PageKind,
    pub rows: Vec<Row>,
    pub grid: GridConfig<PageMessage>,
    pub controller: GridController,
}

impl Page {
    pub const ID_KEY: &'static str = "id";

    pub fn mount(kind: PageKind, cycle: SortCycle, page_size: usize) -> Self {
        let grid = kind.grid();
        grid.report_issues();
        tracing::info!(page = kind.title(), "mounted page");

        Self {
            kind,
            rows: kind.sample_rows(),
            grid,
            controller: GridController::new(cycle, Some(page_size)),
        }
    }

    pub fn find(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|r| row_id(r, Self::ID_KEY) == id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        match self.find(id) {
            Some(idx) => {
                self.rows.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Appends a copy of the row with a fresh identifier, returning it.
    pub fn duplicate(&mut self, id: &str) -> Option<String> {
        let idx = self.find(id)?;
        let mut copy = self.rows[idx].clone();
        let suffix = Uuid::new_v4().simple().to_string();
        let new_id = format!("{}-{}", id, &suffix[..6].to_uppercase());
        copy.insert(Self::ID_KEY.to_string(), serde_json::Value::String(new_id.clone()));
        self.rows.insert(idx + 1, copy);
        Some(new_id)
    }

    pub fn restore_sample_rows(&mut self) {
        self.rows = self.kind.sample_rows();
    }
}

/// View, Edit, Duplicate and Delete, the row actions every page offers.
pub fn standard_actions(noun: &'static str) -> Vec<Action<PageMessage>> {
    vec![
        Action::new("view", "View", move |row: &Row| {
            PageMessage::info(format!("Viewing {} {}", noun, row_id(row, Page::ID_KEY)))
        })
        .icon("👁"),
        Action::new("edit", "Edit", move |row: &Row| {
            PageMessage::info(format!("Editing {} {}", noun, row_id(row, Page::ID_KEY)))
        })
        .icon("✏")
        .variant(Variant::Outline),
        Action::new("duplicate", "Duplicate", |row: &Row| PageMessage::Duplicate {
            id: row_id(row, Page::ID_KEY),
        })
        .icon("⧉")
        .variant(Variant::Secondary),
        Action::new("delete", "Delete", move |row: &Row| PageMessage::ConfirmDelete {
            id: row_id(row, Page::ID_KEY),
            label: format!("{} {}", noun, row_id(row, Page::ID_KEY)),
        })
        .icon("🗑")
        .variant(Variant::Destructive),
    ]
}
