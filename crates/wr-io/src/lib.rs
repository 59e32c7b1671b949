//! `wr-io` — reading route files and exporting distance tables.
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`loader`] | `load_routes_path`, `load_routes_reader`, `parse_routes`    |
//! | [`table`]  | `write_distance_table`, `write_distance_table_path`         |
//! | [`error`]  | `RouteIoError`, `RouteIoResult<T>`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use wr_graph::WeatherGraph;
//! use wr_io::{load_routes_path, write_distance_table_path};
//!
//! let mut graph = WeatherGraph::new();
//! load_routes_path(Path::new("routes.txt"), &mut graph)?;
//! write_distance_table_path(&graph.distance_table(), Path::new("distances.csv"))?;
//! ```

pub mod error;
pub mod loader;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{RouteIoError, RouteIoResult};
pub use loader::{LoadSummary, RouteEdge, load_routes_path, load_routes_reader, parse_routes};
pub use table::{UNREACHABLE, write_distance_table, write_distance_table_path};
