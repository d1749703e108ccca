use super::{options, records, status_tones};
use crate::grid::{CellKind, Column, GridConfig, Row};
use crate::models::page::standard_actions;
use crate::models::PageMessage;
use serde_json::json;

pub fn grid() -> GridConfig<PageMessage> {
    GridConfig::new(vec![
        Column::new("id", "Invoice #").sortable().searchable(),
        Column::new("customer", "Customer").sortable().searchable(),
        Column::new("issued", "Issued")
            .sortable()
            .kind(CellKind::Date { format: "%d %b %Y".to_string() }),
        Column::new("due", "Due")
            .sortable()
            .kind(CellKind::Date { format: "%d %b %Y".to_string() }),
        Column::new("amount", "Amount")
            .sortable()
            .kind(CellKind::Currency { symbol: "$".to_string() }),
        Column::new("status", "Status")
            .sortable()
            .filter(options(&["Paid", "Pending", "Overdue", "Draft"]))
            .kind(CellKind::Badge(status_tones())),
    ])
    .actions(standard_actions("invoice"))
    .search_placeholder("Search invoices by number or customer...")
    .exportable()
    .on_refresh(|| PageMessage::Refresh)
}

pub fn rows() -> Vec<Row> {
    records(json!([
        {"id": "INV-10231", "customer": "Northwind Traders", "issued": "2024-01-03", "due": "2024-02-02", "amount": 12450.0, "status": "Paid"},
        {"id": "INV-10232", "customer": "Contoso Ltd", "issued": "2024-01-08", "due": "2024-02-07", "amount": 8720.25, "status": "Overdue"},
        {"id": "INV-10233", "customer": "Fabrikam, Inc.", "issued": "2024-01-12", "due": "2024-02-11", "amount": 2300.0, "status": "Pending"},
        {"id": "INV-10234", "customer": "Adventure Works", "issued": "2024-01-19", "due": "2024-02-18", "amount": 45100.0, "status": "Paid"},
        {"id": "INV-10235", "customer": "Tailspin Toys", "issued": "2024-01-26", "due": "2024-02-25", "amount": 990.0, "status": "Draft"},
        {"id": "INV-10236", "customer": "Wide World Importers", "issued": "2024-02-02", "due": "2024-03-03", "amount": 17640.8, "status": "Pending"},
        {"id": "INV-10237", "customer": "Contoso Ltd", "issued": "2024-02-09", "due": "2024-03-10", "amount": 5310.0, "status": "Overdue"},
        {"id": "INV-10238", "customer": "Litware \"Labs\"", "issued": "2024-02-15", "due": "2024-03-16", "amount": 7725.0, "status": "Paid"}
    ]))
}
