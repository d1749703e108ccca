use super::{options, records, status_tones};
use crate::grid::{CellKind, Column, GridConfig, RenderError, Row};
use crate::models::page::standard_actions;
use crate::models::PageMessage;
use serde_json::{json, Value};
use std::sync::Arc;

fn rating(value: &Value, _row: &Row) -> Result<String, RenderError> {
    let score = value
        .as_f64()
        .ok_or_else(|| RenderError::custom(format!("rating {} is not a number", value)))?;
    if !(0.0..=5.0).contains(&score) {
        return Err(RenderError::custom(format!("rating {} out of range", score)));
    }
    let stars = score.round() as usize;
    Ok(format!("{}{} {:.1}", "★".repeat(stars), "☆".repeat(5 - stars), score))
}

pub fn grid() -> GridConfig<PageMessage> {
    GridConfig::new(vec![
        Column::new("id", "Supplier ID").sortable(),
        Column::new("name", "Supplier").sortable().searchable(),
        Column::new("contact", "Contact").searchable(),
        Column::new("email", "Email").searchable().kind(CellKind::Link),
        Column::new("category", "Category")
            .sortable()
            .filter(options(&["Hardware", "Office Supplies", "Industrial", "Logistics"])),
        Column::new("rating", "Rating")
            .sortable()
            .kind(CellKind::Custom(Arc::new(rating))),
        Column::new("status", "Status")
            .filter(options(&["Active", "Inactive"]))
            .kind(CellKind::Badge(status_tones())),
    ])
    .actions(standard_actions("supplier"))
    .search_placeholder("Search suppliers...")
    .exportable()
    .on_refresh(|| PageMessage::Refresh)
}

pub fn rows() -> Vec<Row> {
    records(json!([
        {"id": "SUP-001", "name": "Dell Technologies", "contact": "Anna Morales", "email": "anna.morales@dell.example", "category": "Hardware", "rating": 4.6, "status": "Active"},
        {"id": "SUP-002", "name": "Office Depot", "contact": "James Lee", "email": "jlee@officedepot.example", "category": "Office Supplies", "rating": 4.1, "status": "Active"},
        {"id": "SUP-003", "name": "Grainger Industrial", "contact": "Priya Patel", "email": "ppatel@grainger.example", "category": "Industrial", "rating": 3.8, "status": "Active"},
        {"id": "SUP-004", "name": "FreightLine Partners", "contact": "Tom Becker", "email": "tom@freightline.example", "category": "Logistics", "rating": 2.9, "status": "Inactive"},
        {"id": "SUP-005", "name": "CDW Corporation", "contact": "Laura Kim", "email": "lkim@cdw.example", "category": "Hardware", "rating": 4.4, "status": "Active"},
        {"id": "SUP-006", "name": "Fastenal", "contact": "Marcus Reed", "email": "mreed@fastenal.example", "category": "Industrial", "rating": "unrated", "status": "Inactive"},
        {"id": "SUP-007", "name": "Staples Business", "contact": "Olivia Grant", "email": "ogrant@staples.example", "category": "Office Supplies", "rating": 3.5, "status": "Active"}
    ]))
}
