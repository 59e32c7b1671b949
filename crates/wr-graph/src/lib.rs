//! `wr-graph` — weather-weighted city graph and all-pairs shortest paths.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`registry`] | `City`, `CityRegistry` (name ↔ dense `CityId`)               |
//! | [`weights`]  | `WeightMatrices` (one `n × n` layer per weather)             |
//! | [`engine`]   | `ShortestPathEngine` (Floyd-Warshall + path reconstruction)  |
//! | [`graph`]    | `WeatherGraph` mutators and weather selection                |
//! | [`queries`]  | Shortest path, path cost, graph center, `DistanceTable`      |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                               |
//!
//! # Recompute model
//!
//! Any topology or weather change rebuilds both shortest-path tables from
//! scratch before the mutator returns.  There is no incremental update.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `wr-core` types.        |

pub mod engine;
pub mod error;
pub mod graph;
pub mod queries;
pub mod registry;
pub mod weights;


pub use engine::{EngineState, ShortestPathEngine};
pub use error::{GraphError, GraphResult};
pub use graph::WeatherGraph;
pub use queries::{DistanceTable, Route};
pub use registry::{City, CityRegistry};
pub use weights::WeightMatrices;
