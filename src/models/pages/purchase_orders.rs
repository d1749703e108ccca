use super::{options, records, status_tones};
use crate::grid::{CellKind, Column, FilterOption, GridConfig, MatchStrategy, Row};
use crate::models::page::standard_actions;
use crate::models::PageMessage;
use serde_json::json;

pub fn grid() -> GridConfig<PageMessage> {
    GridConfig::new(vec![
        Column::new("id", "PO Number").sortable().searchable(),
        Column::new("supplier", "Supplier").sortable().searchable(),
        Column::new("orderDate", "Order Date")
            .sortable()
            .kind(CellKind::Date { format: "%b %d, %Y".to_string() }),
        Column::new("deliveryDate", "Expected Delivery")
            .sortable()
            .kind(CellKind::Date { format: "%b %d, %Y".to_string() }),
        Column::new("totalValue", "Total Value")
            .sortable()
            .filter(vec![
                FilterOption::new("$10k and above", "10000"),
                FilterOption::new("$50k and above", "50000"),
            ])
            .matching(MatchStrategy::AtLeast)
            .kind(CellKind::Currency { symbol: "$".to_string() }),
        Column::new("status", "Status")
            .sortable()
            .filter(options(&["Draft", "Pending", "Approved", "Delivered", "Cancelled"]))
            .kind(CellKind::Badge(status_tones())),
        Column::new("buyer", "Buyer").searchable(),
    ])
    .actions(standard_actions("purchase order"))
    .search_placeholder("Search purchase orders...")
    .exportable()
    .on_refresh(|| PageMessage::Refresh)
}

pub fn rows() -> Vec<Row> {
    records(json!([
        {"id": "PO-2024-001", "supplier": "Dell Technologies", "orderDate": "2024-01-15", "deliveryDate": "2024-02-01", "totalValue": 45250.0, "status": "Approved", "buyer": "Sarah Johnson"},
        {"id": "PO-2024-002", "supplier": "Office Depot", "orderDate": "2024-01-18", "deliveryDate": "2024-01-25", "totalValue": 3280.5, "status": "Delivered", "buyer": "Mike Chen"},
        {"id": "PO-2024-003", "supplier": "Grainger Industrial", "orderDate": "2024-01-22", "deliveryDate": "2024-02-10", "totalValue": 12800.0, "status": "Pending", "buyer": "Sarah Johnson"},
        {"id": "PO-2024-004", "supplier": "CDW Corporation", "orderDate": "2024-01-25", "deliveryDate": "2024-02-15", "totalValue": 78900.0, "status": "Approved", "buyer": "Emily Davis"},
        {"id": "PO-2024-005", "supplier": "Staples Business", "orderDate": "2024-02-01", "deliveryDate": "2024-02-08", "totalValue": 1540.75, "status": "Draft", "buyer": "Mike Chen"},
        {"id": "PO-2024-006", "supplier": "Fastenal", "orderDate": "2024-02-03", "deliveryDate": "2024-02-20", "totalValue": 8650.0, "status": "Cancelled", "buyer": "Robert Wilson"},
        {"id": "PO-2024-007", "supplier": "HP Inc.", "orderDate": "2024-02-06", "deliveryDate": "2024-02-28", "totalValue": 52300.0, "status": "Pending", "buyer": "Emily Davis"},
        {"id": "PO-2024-008", "supplier": "Uline", "orderDate": "2024-02-09", "deliveryDate": "TBD", "totalValue": 2210.0, "status": "Draft", "buyer": "Robert Wilson"},
        {"id": "PO-2024-009", "supplier": "Dell Technologies", "orderDate": "2024-02-12", "deliveryDate": "2024-03-01", "totalValue": 18475.0, "status": "Approved", "buyer": "Sarah Johnson"},
        {"id": "PO-2024-010", "supplier": "McMaster-Carr", "orderDate": "2024-02-14", "deliveryDate": "2024-02-21", "totalValue": 960.0, "status": "Delivered", "buyer": "Mike Chen"},
        {"id": "PO-2024-011", "supplier": "Lenovo", "orderDate": "2024-02-18", "deliveryDate": "2024-03-10", "totalValue": 34120.0, "status": "Pending", "buyer": "Emily Davis"}
    ]))
}
