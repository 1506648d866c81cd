//! Output formatting utilities

use std::fmt;
use std::str::FromStr;

use campath_core::{Location, Route};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Table};
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format: {} (expected table or json)", other),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Pretty JSON for any serializable value
pub fn to_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

fn new_table<const N: usize>(header: [&str; N]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(header);
    table
}

/// Render locations, already sorted by the caller
pub fn format_locations(locations: &[Location], format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return to_json(&locations);
    }
    if locations.is_empty() {
        return Ok("No locations".to_string());
    }

    let mut table = new_table(["ID", "NAME", "COORDINATES"]);
    for location in locations {
        table.add_row([
            Cell::new(&location.id),
            Cell::new(&location.name),
            Cell::new(location.coordinates),
        ]);
    }
    Ok(table.to_string())
}

/// Render a route lookup; `None` means no route exists
pub fn format_route(
    from: &str,
    to: &str,
    route: Option<&Route>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return to_json(&route);
    }
    let Some(route) = route else {
        return Ok(format!("No route from {} to {}", from, to));
    };

    let summary = format!(
        "Route from {} to {}: {} segment(s), total length {:.2}",
        from,
        to,
        route.hops(),
        route.total_length
    );
    if route.is_empty() {
        return Ok(summary);
    }

    let mut table = new_table(["#", "FROM", "TO", "LENGTH"]);
    for (i, segment) in route.segments.iter().enumerate() {
        table.add_row([
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(segment.origin),
            Cell::new(segment.destination),
            Cell::new(format!("{:.2}", segment.length.get())).set_alignment(CellAlignment::Right),
        ]);
    }
    Ok(format!("{}\n{}", summary, table))
}
