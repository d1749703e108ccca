use super::{options, records, status_tones};
use crate::grid::{CellKind, Column, GridConfig, Row};
use crate::models::page::standard_actions;
use crate::models::PageMessage;
use serde_json::json;

pub fn grid() -> GridConfig<PageMessage> {
    GridConfig::new(vec![
        Column::new("id", "Contract ID").sortable().searchable(),
        Column::new("title", "Title").sortable().searchable(),
        Column::new("party", "Counterparty").sortable().searchable(),
        Column::new("type", "Type").filter(options(&["Supply", "Service", "License", "Lease"])),
        Column::new("start", "Start")
            .sortable()
            .kind(CellKind::Date { format: "%Y-%m-%d".to_string() }),
        Column::new("end", "End")
            .sortable()
            .kind(CellKind::Date { format: "%Y-%m-%d".to_string() }),
        Column::new("value", "Contract Value")
            .sortable()
            .kind(CellKind::Currency { symbol: "$".to_string() }),
        Column::new("status", "Status")
            .filter(options(&["Active", "Under Review", "Expired", "Draft"]))
            .kind(CellKind::Badge(status_tones())),
    ])
    .actions(standard_actions("contract"))
    .search_placeholder("Search contracts...")
    .exportable()
    .on_refresh(|| PageMessage::Refresh)
}

pub fn rows() -> Vec<Row> {
    records(json!([
        {"id": "CTR-2023-014", "title": "Laptop fleet supply", "party": "Dell Technologies", "type": "Supply", "start": "2023-04-01", "end": "2025-03-31", "value": 480000.0, "status": "Active"},
        {"id": "CTR-2023-022", "title": "Facilities cleaning", "party": "BrightClean Services", "type": "Service", "start": "2023-07-01", "end": "2024-06-30", "value": 96000.0, "status": "Active"},
        {"id": "CTR-2023-031", "title": "ERP licence renewal", "party": "Contoso Software", "type": "License", "start": "2023-01-01", "end": "2023-12-31", "value": 125000.0, "status": "Expired"},
        {"id": "CTR-2024-002", "title": "Warehouse lease, Building C", "party": "Harbor Properties", "type": "Lease", "start": "2024-02-01", "end": "2029-01-31", "value": 1250000.0, "status": "Under Review"},
        {"id": "CTR-2024-005", "title": "Industrial consumables", "party": "Grainger Industrial", "type": "Supply", "start": "2024-03-01", "end": "2025-02-28", "value": 64000.0, "status": "Draft"},
        {"id": "CTR-2024-009", "title": "Network support, 24/7", "party": "CDW Corporation", "type": "Service", "start": "2024-01-15", "end": "open-ended", "value": 38500.0, "status": "Active"}
    ]))
}
