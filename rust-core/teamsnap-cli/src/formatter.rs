// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//!
//! Output formatters for discovered types and returned objects.
//!
//! - **Table**: columnar output using `comfy-table`.
//! - **JSON**: pretty-printed serialization of the objects.

use std::fmt;

use comfy_table::{Cell, ContentArrangement, Table};
use serde_json::Value;
use teamsnap_client::{Registry, Resource, ResourceType};

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One row per discovered type, root operations first.
pub fn format_types(registry: &Registry) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Type"),
        Cell::new("Rel"),
        Cell::new("Searchable"),
        Cell::new("Operations"),
    ]);

    for resource_type in std::iter::once(registry.root()).chain(registry.types()) {
        table.add_row(vec![
            Cell::new(resource_type.name()),
            Cell::new(resource_type.rel()),
            Cell::new(if resource_type.is_searchable() { "yes" } else { "no" }),
            Cell::new(operation_list(resource_type)),
        ]);
    }

    let count = registry.len();
    format!("{table}\n({count} type{})", if count == 1 { "" } else { "s" })
}

/// `search(id, team_id), disable_member(member_id)`
fn operation_list(resource_type: &ResourceType) -> String {
    resource_type
        .operations()
        .map(|operation| format!("{}({})", operation.name(), operation.arguments().join(", ")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render returned objects.
pub fn format_resources(resources: &[Resource], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let value = serde_json::to_value(resources).unwrap_or(Value::Null);
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        }
        OutputFormat::Table => format_resource_table(resources),
    }
}

/// Each object becomes a row; each attribute name seen becomes a column.
fn format_resource_table(resources: &[Resource]) -> String {
    let mut columns: Vec<&str> = Vec::new();
    for resource in resources {
        for name in resource.attributes().keys() {
            if name != "type" && !columns.contains(&name.as_str()) {
                columns.push(name.as_str());
            }
        }
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        std::iter::once("type")
            .chain(columns.iter().copied())
            .map(Cell::new),
    );
    for resource in resources {
        let mut row = vec![Cell::new(resource.type_name())];
        row.extend(
            columns
                .iter()
                .map(|column| Cell::new(value_to_cell(resource.get(column).unwrap_or(&Value::Null)))),
        );
        table.add_row(row);
    }

    let count = resources.len();
    format!("{table}\n({count} row{})", if count == 1 { "" } else { "s" })
}

/// Short text form of a value for a table cell.
fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
