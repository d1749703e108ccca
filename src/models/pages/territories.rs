use super::{options, records};
use crate::grid::{CellKind, Column, GridConfig, MatchStrategy, Row};
use crate::models::page::standard_actions;
use crate::models::PageMessage;
use serde_json::json;

pub fn grid() -> GridConfig<PageMessage> {
    GridConfig::new(vec![
        Column::new("id", "Territory").sortable().searchable(),
        Column::new("name", "Name").sortable().searchable(),
        Column::new("region", "Region")
            .sortable()
            .filter(options(&["North", "South", "East", "West"]))
            .matching(MatchStrategy::StartsWith),
        Column::new("manager", "Sales Manager").searchable(),
        Column::new("accounts", "Accounts").sortable(),
        Column::new("revenue", "Revenue YTD")
            .sortable()
            .kind(CellKind::Currency { symbol: "$".to_string() }),
        Column::new("quotaAttainment", "Quota")
            .sortable()
            .kind(CellKind::Percent),
    ])
    .actions(standard_actions("territory"))
    .search_placeholder("Search territories...")
    .exportable()
    .on_refresh(|| PageMessage::Refresh)
}

pub fn rows() -> Vec<Row> {
    records(json!([
        {"id": "T-NE-01", "name": "New England", "region": "North East", "manager": "Diane Porter", "accounts": 42, "revenue": 1820000.0, "quotaAttainment": 104.5},
        {"id": "T-NW-01", "name": "Pacific Northwest", "region": "North West", "manager": "Carlos Ruiz", "accounts": 35, "revenue": 1410000.0, "quotaAttainment": 92},
        {"id": "T-SE-01", "name": "Southeast", "region": "South East", "manager": "Kim Nguyen", "accounts": 51, "revenue": 2230000.0, "quotaAttainment": 111.2},
        {"id": "T-SW-01", "name": "Desert Southwest", "region": "South West", "manager": "Paul Brooks", "accounts": 18, "revenue": 640000.0, "quotaAttainment": 78.4},
        {"id": "T-E-02", "name": "Mid-Atlantic", "region": "East", "manager": "Grace Holt", "accounts": 47, "revenue": 1975000.0, "quotaAttainment": 99},
        {"id": "T-W-02", "name": "Northern California", "region": "West", "manager": "Ivan Petrov", "accounts": 60, "revenue": 2780000.0, "quotaAttainment": 118.6}
    ]))
}
