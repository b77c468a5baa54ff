//! Insert statements for the two-table division schema.
//!
//! country_division_types (id, name, code, level, parent_type_id, description)
//! country_divisions      (id, type_id, parent_id, name, division_slug)
//!
//! Types come first in header order, then divisions in source order. Text is
//! escaped by doubling single quotes and nothing else; codes, ids and slugs
//! never contain quotes.

use crate::hierarchy::{Division, Hierarchy};
use crate::types::DivisionType;

pub const TYPES_TABLE: &str = "country_division_types";
pub const DIVISIONS_TABLE: &str = "country_divisions";

pub fn render_statements(hierarchy: &Hierarchy) -> String {
    let mut sql = String::new();
    sql.push_str("-- SQL Insert Script for Country Tree Structure\n");
    sql.push_str("-- Generated by division-id\n\n");

    sql.push_str("-- Insert division types\n");
    for division_type in &hierarchy.types {
        sql.push_str(&type_statement(division_type));
    }

    sql.push_str("\n-- Insert divisions\n");
    for division in &hierarchy.divisions {
        sql.push_str(&division_statement(division));
    }

    sql
}

fn type_statement(t: &DivisionType) -> String {
    let parent = match t.parent_type_id() {
        Some(id) => id.to_string(),
        None => "null".to_string(),
    };

    format!(
        "INSERT INTO {} (id, name, code, level, parent_type_id, description) VALUES ({}, '{}', '{}', {}, {}, '{}');\n",
        TYPES_TABLE,
        t.id,
        escape(&t.name),
        t.code,
        t.level,
        parent,
        escape(&t.description()),
    )
}

fn division_statement(d: &Division) -> String {
    let parent = match &d.parent_id {
        Some(id) => format!("'{}'", id),
        None => "NULL".to_string(),
    };

    format!(
        "INSERT INTO {} (id, type_id, parent_id, name, division_slug) VALUES ('{}', {}, {}, '{}', '{}');\n",
        DIVISIONS_TABLE,
        d.id,
        d.type_id,
        parent,
        escape(&d.name),
        d.slug,
    )
}

fn escape(text: &str) -> String {
    text.replace('\'', "''")
}
