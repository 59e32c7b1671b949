//! Weather conditions and the temperature → weather mapping.
//!
//! Each condition selects one cost layer of the graph.  The integer codes
//! 0–3 are stable and double as layer indices.

use crate::{CoreError, CoreResult};

/// The weather condition that selects which travel-cost layer is active.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weather {
    /// Clear conditions (code 0, default).
    #[default]
    Normal = 0,
    /// Code 1.
    Rain = 1,
    /// Code 2.
    Snow = 2,
    /// Code 3.
    Storm = 3,
}

impl Weather {
    /// Number of weather conditions (and cost layers).
    pub const COUNT: usize = 4;

    /// All conditions in code order.
    pub const ALL: [Weather; Weather::COUNT] =
        [Weather::Normal, Weather::Rain, Weather::Snow, Weather::Storm];

    /// Integer code in `0..4`.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Layer index for per-weather arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: u8) -> CoreResult<Weather> {
        Weather::ALL
            .get(code as usize)
            .copied()
            .ok_or(CoreError::UnknownWeatherCode(code))
    }

    /// Map a temperature to a condition using the default thresholds.
    pub fn from_temperature(celsius: f64) -> CoreResult<Weather> {
        WeatherThresholds::default().classify(celsius)
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            Weather::Normal => "normal",
            Weather::Rain   => "rain",
            Weather::Snow   => "snow",
            Weather::Storm  => "storm",
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Weather {
    type Error = CoreError;
    fn try_from(code: u8) -> CoreResult<Weather> {
        Weather::from_code(code)
    }
}

// ── WeatherThresholds ─────────────────────────────────────────────────────────

/// Temperature bands (°C) used by [`classify`](Self::classify).
///
/// Each band includes its lower bound:
///
/// ```text
///              t ≥ normal_min  → Normal
/// rain_min   ≤ t < normal_min  → Rain
/// snow_min   ≤ t < rain_min    → Snow
///              t < snow_min    → Storm
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherThresholds {
    pub normal_min: f64,
    pub rain_min:   f64,
    pub snow_min:   f64,
}

impl WeatherThresholds {
    /// Classify `celsius` into a weather condition.
    ///
    /// NaN has no band and is rejected with [`CoreError::InvalidTemperature`].
    pub fn classify(&self, celsius: f64) -> CoreResult<Weather> {
        if celsius.is_nan() {
            return Err(CoreError::InvalidTemperature(celsius));
        }
        let weather = if celsius >= self.normal_min {
            Weather::Normal
        } else if celsius >= self.rain_min {
            Weather::Rain
        } else if celsius >= self.snow_min {
            Weather::Snow
        } else {
            Weather::Storm
        };
        Ok(weather)
    }
}

impl Default for WeatherThresholds {
    fn default() -> Self {
        Self { normal_min: 15.0, rain_min: 5.0, snow_min: -5.0 }
    }
}
