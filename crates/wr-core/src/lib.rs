//! `wr-core` — foundational types for the `weather_routes` workspace.
//!
//! This crate is a dependency of every other `wr-*` crate.  It has no `wr-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `CityId`                                                |
//! | [`weather`]   | `Weather`, `WeatherThresholds`                          |
//! | [`cost`]      | `Cost`, `INFINITY`, `WeatherCosts`                      |
//! | [`config`]    | `GraphConfig`                                           |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod cost;
pub mod error;
pub mod ids;
pub mod weather;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GraphConfig;
pub use cost::{Cost, INFINITY, WeatherCosts, is_finite};
pub use error::{CoreError, CoreResult};
pub use ids::CityId;
pub use weather::{Weather, WeatherThresholds};
