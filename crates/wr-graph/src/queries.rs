//! Read-only queries over the latest shortest-path tables.
//!
//! Everything here reads the engine's distance and predecessor tables;
//! nothing recomputes.  Unknown city names propagate as
//! [`GraphError::UnknownCity`].

use std::fmt;

use wr_core::{CityId, Cost, Weather, WeatherCosts, is_finite};

use crate::{GraphError, GraphResult, WeatherGraph};

// ── Route ─────────────────────────────────────────────────────────────────────

/// A shortest path together with its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<'g> {
    /// City names from origin to destination inclusive.
    pub cities: Vec<&'g str>,
    /// Sum of edge costs under the active weather.
    pub cost: Cost,
}

impl Route<'_> {
    /// `true` if origin and destination are the same city.
    pub fn is_trivial(&self) -> bool {
        self.cities.len() == 1
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }
}

// ── DistanceTable ─────────────────────────────────────────────────────────────

/// Snapshot of the distance table with city names as headers.
///
/// Pure data: rows are origins, columns are destinations, both in registry
/// order.  `None` cells are unreachable.  The `Display` impl renders a
/// plain-text grid with `∞` for unreachable cells.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    pub weather:     Weather,
    pub temperature: Option<f64>,
    pub cities:      Vec<String>,
    cells:           Vec<Option<Cost>>,
}

impl DistanceTable {
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cell at `(row, col)`; `None` if unreachable.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cost> {
        assert!(row < self.len() && col < self.len(), "distance table index out of range");
        self.cells[row * self.len() + col]
    }

    /// Rows as `(origin name, cells)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Option<Cost>])> + '_ {
        let n = self.len();
        self.cities
            .iter()
            .enumerate()
            .map(move |(i, name)| (name.as_str(), &self.cells[i * n..(i + 1) * n]))
    }
}

impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cities
            .iter()
            .map(|c| c.chars().count())
            .chain(self.cells.iter().flatten().map(|d| d.to_string().len()))
            .max()
            .unwrap_or(1)
            .max(1);

        write!(f, "{:width$}", "")?;
        for city in &self.cities {
            write!(f, " {city:>width$}")?;
        }
        writeln!(f)?;

        for (origin, cells) in self.rows() {
            write!(f, "{origin:width$}")?;
            for cell in cells {
                match cell {
                    Some(d) => write!(f, " {d:>width$}")?,
                    None    => write!(f, " {:>width$}", "∞")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

impl WeatherGraph {
    /// City names on the shortest path from `origin` to `destination`.
    ///
    /// `[origin]` when both are the same city, empty when there is no path.
    pub fn shortest_path(&self, origin: &str, destination: &str) -> GraphResult<Vec<&str>> {
        let ids = self.shortest_path_ids(origin, destination)?;
        Ok(ids.into_iter().filter_map(|id| self.registry.name_of(id)).collect())
    }

    /// Like [`shortest_path`](Self::shortest_path) but returns ids.
    pub fn shortest_path_ids(&self, origin: &str, destination: &str) -> GraphResult<Vec<CityId>> {
        let (from, to) = self.endpoints(origin, destination)?;
        Ok(self.engine.path(from, to))
    }

    /// Total cost of the shortest path, `None` if there is no path.
    pub fn path_cost(&self, origin: &str, destination: &str) -> GraphResult<Option<Cost>> {
        let (from, to) = self.endpoints(origin, destination)?;
        Ok(self.engine.distance(from, to))
    }

    /// Path and cost together, `None` if there is no path.
    pub fn shortest_route(&self, origin: &str, destination: &str) -> GraphResult<Option<Route<'_>>> {
        let Some(cost) = self.path_cost(origin, destination)? else {
            return Ok(None);
        };
        let cities = self.shortest_path(origin, destination)?;
        if cities.is_empty() {
            return Ok(None);
        }
        Ok(Some(Route { cities, cost }))
    }

    /// Largest shortest-path cost from `name` to any city; `None` if some
    /// city is unreachable from it.
    pub fn eccentricity(&self, name: &str) -> GraphResult<Option<Cost>> {
        let id = self.registry.id_of(name)?;
        let ecc = self.engine.eccentricity(id);
        Ok(is_finite(ecc).then_some(ecc))
    }

    /// The city with minimal eccentricity; ties go to the earliest
    /// registered city.
    ///
    /// A graph where every city has some unreachable target still has a
    /// center: all eccentricities tie at infinity and the first city wins.
    pub fn graph_center(&self) -> GraphResult<&str> {
        self.engine
            .center()
            .and_then(|id| self.registry.name_of(id))
            .ok_or(GraphError::EmptyGraph)
    }

    /// Snapshot of the distance table for the active weather.
    pub fn distance_table(&self) -> DistanceTable {
        let cities: Vec<String> = self.registry.names().map(str::to_owned).collect();
        let cells = self
            .registry
            .iter()
            .flat_map(move |(origin, _)| {
                self.engine
                    .row(origin)
                    .iter()
                    .map(|&d| is_finite(d).then_some(d))
            })
            .collect();
        DistanceTable {
            weather: self.weather(),
            temperature: self.temperature(),
            cities,
            cells,
        }
    }

    /// Costs installed on the direct edge `origin → destination`.
    pub fn edge_costs(&self, origin: &str, destination: &str) -> GraphResult<Option<WeatherCosts>> {
        let (from, to) = self.endpoints(origin, destination)?;
        Ok(self.weights.edge(from, to))
    }

    /// Every installed edge as `(origin, destination, costs)`, row-major.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, WeatherCosts)> + '_ {
        self.registry.iter().flat_map(move |(from, origin)| {
            self.registry.iter().filter_map(move |(to, destination)| {
                self.weights
                    .edge(from, to)
                    .map(|costs| (origin.name(), destination.name(), costs))
            })
        })
    }

    fn endpoints(&self, origin: &str, destination: &str) -> GraphResult<(CityId, CityId)> {
        Ok((self.registry.id_of(origin)?, self.registry.id_of(destination)?))
    }
}
