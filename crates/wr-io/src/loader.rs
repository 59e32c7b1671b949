//! Route-file loader.
//!
//! # Format
//!
//! One directed edge per line, space-separated, no header:
//!
//! ```text
//! <origin> <destination> <normal> <rain> <snow> <storm>
//! Lima Quito 10 15 20 25
//! Quito Bogota 10 15 20 25
//! ```
//!
//! Each line registers both cities and installs the edge with one cost per
//! weather.  Fields are separated by one or more spaces; leading, trailing
//! and repeated spaces are ignored, as are blank lines.  Quote characters
//! have no special meaning: city names are taken verbatim.
//!
//! # Validation
//!
//! The whole file is parsed and validated before the graph is touched, so a
//! bad line leaves the graph unchanged.  Edges are then installed with a
//! single shortest-path recomputation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;
use tracing::info;

use wr_core::{Cost, WeatherCosts};
use wr_graph::WeatherGraph;

use crate::{RouteIoError, RouteIoResult};

/// Fields per line.
const FIELDS: usize = 6;

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    origin:      String,
    destination: String,
    normal:      Cost,
    rain:        Cost,
    snow:        Cost,
    storm:       Cost,
}

/// A validated route line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEdge {
    pub origin:      String,
    pub destination: String,
    pub costs:       WeatherCosts,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines installed as edges.
    pub records:      usize,
    /// Cities that were not registered before the load.
    pub cities_added: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a route file into `graph`.
pub fn load_routes_path(path: &Path, graph: &mut WeatherGraph) -> RouteIoResult<LoadSummary> {
    let file = File::open(path)?;
    load_routes_reader(file, graph)
}

/// Like [`load_routes_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded route data.
pub fn load_routes_reader<R: Read>(reader: R, graph: &mut WeatherGraph) -> RouteIoResult<LoadSummary> {
    let edges = parse_routes(reader)?;

    let before = graph.city_count();
    let records = graph.extend_edges(
        edges
            .into_iter()
            .map(|e| (e.origin, e.destination, e.costs)),
    );
    let summary = LoadSummary { records, cities_added: graph.city_count() - before };

    info!(records = summary.records, cities_added = summary.cities_added, "routes loaded");
    Ok(summary)
}

/// Parse and validate every line without touching a graph.
pub fn parse_routes<R: Read>(reader: R) -> RouteIoResult<Vec<RouteEdge>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut edges = Vec::new();
    for result in csv_reader.records() {
        let raw = result?;
        let line = raw.position().map_or(0, |p| p.line());

        // Runs of spaces and trailing spaces yield empty fields.
        let record: StringRecord = raw.iter().filter(|f| !f.is_empty()).collect();
        if record.is_empty() {
            continue;
        }

        if record.len() != FIELDS {
            return Err(RouteIoError::Malformed {
                line,
                reason: format!("expected {FIELDS} fields, found {}", record.len()),
            });
        }

        let row: RouteRecord = record
            .deserialize(None)
            .map_err(|e| RouteIoError::Malformed { line, reason: e.to_string() })?;

        let costs = WeatherCosts::non_negative([row.normal, row.rain, row.snow, row.storm])
            .map_err(|source| RouteIoError::InvalidWeight { line, source })?;

        edges.push(RouteEdge { origin: row.origin, destination: row.destination, costs });
    }
    Ok(edges)
}
