//! Travel costs and the "no edge / no path" sentinel.
//!
//! Costs are plain signed integers.  The graph itself accepts any value;
//! non-negativity is enforced by [`WeatherCosts::non_negative`], which the
//! ingestion layer uses before handing costs to the graph.

use std::ops::Index;

use crate::{CoreError, CoreResult, Weather};

/// Travel cost between two cities (unit chosen by the data source).
pub type Cost = i64;

/// Sentinel meaning "no direct edge" in a weight layer, or "no path" in a
/// distance table.  Any value `>= INFINITY` is treated as unreachable.
///
/// Half of `i64::MAX` so that adding two finite costs below the sentinel
/// never overflows.
pub const INFINITY: Cost = Cost::MAX / 2;

/// `true` if `cost` denotes a real edge or path.
#[inline]
pub fn is_finite(cost: Cost) -> bool {
    cost < INFINITY
}

/// One cost per weather condition for a single directed edge, indexed by
/// [`Weather`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherCosts(pub [Cost; Weather::COUNT]);

impl WeatherCosts {
    /// Wrap raw costs in `[normal, rain, snow, storm]` order without
    /// validation.
    pub fn new(costs: [Cost; Weather::COUNT]) -> Self {
        Self(costs)
    }

    /// Same cost under every weather.
    pub fn uniform(cost: Cost) -> Self {
        Self([cost; Weather::COUNT])
    }

    /// Validating constructor: rejects the first negative cost with
    /// [`CoreError::InvalidWeight`].
    pub fn non_negative(costs: [Cost; Weather::COUNT]) -> CoreResult<Self> {
        for weather in Weather::ALL {
            let cost = costs[weather.index()];
            if cost < 0 {
                return Err(CoreError::InvalidWeight { weather, cost });
            }
        }
        Ok(Self(costs))
    }

    /// Cost under `weather`.
    #[inline]
    pub fn get(&self, weather: Weather) -> Cost {
        self.0[weather.index()]
    }

    /// `true` if at least one layer holds a finite cost.
    pub fn any_finite(&self) -> bool {
        self.0.iter().any(|&c| is_finite(c))
    }

    /// `(weather, cost)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (Weather, Cost)> + '_ {
        Weather::ALL.into_iter().map(move |w| (w, self.get(w)))
    }
}

impl Index<Weather> for WeatherCosts {
    type Output = Cost;
    fn index(&self, weather: Weather) -> &Cost {
        &self.0[weather.index()]
    }
}

impl From<[Cost; Weather::COUNT]> for WeatherCosts {
    fn from(costs: [Cost; Weather::COUNT]) -> Self {
        Self(costs)
    }
}
