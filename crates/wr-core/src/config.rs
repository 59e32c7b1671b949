//! Graph configuration.

use crate::{Weather, WeatherThresholds};

/// Settings applied when a graph is constructed.
///
/// ```
/// use wr_core::{GraphConfig, Weather};
///
/// let cfg = GraphConfig { initial_weather: Weather::Snow, ..GraphConfig::default() };
/// assert_eq!(cfg.thresholds.normal_min, 15.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    /// Active weather before any `set_weather*` call.
    pub initial_weather: Weather,

    /// Bands used by `set_weather_by_temperature`.
    pub thresholds: WeatherThresholds,
}
