use super::{options, records, status_tones};
use crate::grid::{CellKind, Column, FilterOption, GridConfig, MatchStrategy, Row};
use crate::models::page::standard_actions;
use crate::models::PageMessage;
use serde_json::json;

pub fn grid() -> GridConfig<PageMessage> {
    GridConfig::new(vec![
        Column::new("id", "Customer ID").sortable(),
        Column::new("name", "Company").sortable().searchable(),
        Column::new("contact", "Primary Contact").searchable(),
        Column::new("email", "Email").searchable().kind(CellKind::Link),
        Column::new("segment", "Segment")
            .filter(options(&["enterprise", "mid-market", "smb"]))
            .matching(MatchStrategy::IgnoreCase),
        Column::new("lifetimeValue", "Lifetime Value")
            .sortable()
            .filter(vec![FilterOption::new("Under $50k", "50000")])
            .matching(MatchStrategy::AtMost)
            .kind(CellKind::Currency { symbol: "$".to_string() }),
        Column::new("status", "Status")
            .filter(options(&["Active", "Inactive"]))
            .kind(CellKind::Badge(status_tones())),
    ])
    .actions(standard_actions("customer"))
    .search_placeholder("Search customers...")
    .exportable()
    .on_refresh(|| PageMessage::Refresh)
}

pub fn rows() -> Vec<Row> {
    records(json!([
        {"id": "CUS-0001", "name": "Northwind Traders", "contact": "Nancy Davolio", "email": "nancy@northwind.example", "segment": "Enterprise", "lifetimeValue": 1240000.0, "status": "Active"},
        {"id": "CUS-0002", "name": "Contoso Ltd", "contact": "Andrew Fuller", "email": "afuller@contoso.example", "segment": "Mid-Market", "lifetimeValue": 312500.0, "status": "Active"},
        {"id": "CUS-0003", "name": "Fabrikam, Inc.", "contact": "Janet Leverling", "email": "janet@fabrikam.example", "segment": "SMB", "lifetimeValue": 48200.0, "status": "Active"},
        {"id": "CUS-0004", "name": "Tailspin Toys", "contact": "Steven Buchanan", "email": "steven@tailspin.example", "segment": "SMB", "lifetimeValue": 12900.0, "status": "Inactive"},
        {"id": "CUS-0005", "name": "Adventure Works", "contact": "Laura Callahan", "email": "laura@adventure.example", "segment": "Enterprise", "lifetimeValue": 2045000.0, "status": "Active"},
        {"id": "CUS-0006", "name": "Wide World Importers", "contact": "Robert King", "email": "rking@wwi.example", "segment": "Mid-Market", "lifetimeValue": 276300.0, "status": "Active"},
        {"id": "CUS-0007", "name": "Litware Labs", "contact": "Anne Dodsworth", "email": "anne@litware.example", "segment": "SMB", "status": "Inactive"}
    ]))
}
