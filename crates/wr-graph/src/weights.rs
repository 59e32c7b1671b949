//! Per-weather dense weight matrices.
//!
//! # Data layout
//!
//! One flat `Vec<Cost>` holds all layers back to back:
//!
//! ```text
//! cells[ weather * n*n + origin * n + destination ]
//! ```
//!
//! Every layer is always `n × n`.  [`grow`](WeightMatrices::grow) rebuilds
//! the buffer for the larger dimension, copying old cells and padding new
//! rows and columns with [`INFINITY`].

use wr_core::{CityId, Cost, INFINITY, Weather, WeatherCosts};

/// Directed edge costs for all weathers over a dense city index space.
#[derive(Clone, Debug, Default)]
pub struct WeightMatrices {
    n:     usize,
    cells: Vec<Cost>,
}

impl WeightMatrices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matrices for `n` cities with no edges.
    pub fn with_dimension(n: usize) -> Self {
        Self { n, cells: vec![INFINITY; Weather::COUNT * n * n] }
    }

    /// Current dimension `n`.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Resize every layer to `new_n × new_n`.  Shrinking is not supported;
    /// a `new_n` at or below the current dimension is a no-op.
    pub fn grow(&mut self, new_n: usize) {
        if new_n <= self.n {
            return;
        }
        let old_n = self.n;
        let mut cells = vec![INFINITY; Weather::COUNT * new_n * new_n];
        for w in 0..Weather::COUNT {
            for row in 0..old_n {
                let src = w * old_n * old_n + row * old_n;
                let dst = w * new_n * new_n + row * new_n;
                cells[dst..dst + old_n].copy_from_slice(&self.cells[src..src + old_n]);
            }
        }
        self.n = new_n;
        self.cells = cells;
    }

    #[inline]
    fn offset(&self, weather: Weather, origin: CityId, destination: CityId) -> usize {
        debug_assert!(origin.index() < self.n && destination.index() < self.n);
        weather.index() * self.n * self.n + origin.index() * self.n + destination.index()
    }

    #[inline]
    pub fn get(&self, weather: Weather, origin: CityId, destination: CityId) -> Cost {
        self.cells[self.offset(weather, origin, destination)]
    }

    /// Costs of the edge for all weathers, `None` if no layer holds a finite
    /// cost.
    pub fn edge(&self, origin: CityId, destination: CityId) -> Option<WeatherCosts> {
        let costs = WeatherCosts::new(Weather::ALL.map(|w| self.get(w, origin, destination)));
        costs.any_finite().then_some(costs)
    }

    /// Install `costs` on every layer.
    pub fn set(&mut self, origin: CityId, destination: CityId, costs: WeatherCosts) {
        for (weather, cost) in costs.iter() {
            let at = self.offset(weather, origin, destination);
            self.cells[at] = cost;
        }
    }

    /// Reset the edge to [`INFINITY`] on every layer.
    pub fn clear(&mut self, origin: CityId, destination: CityId) {
        self.set(origin, destination, WeatherCosts::uniform(INFINITY));
    }

    /// The row-major `n × n` layer for `weather`.
    pub fn layer(&self, weather: Weather) -> &[Cost] {
        let size = self.n * self.n;
        let start = weather.index() * size;
        &self.cells[start..start + size]
    }
}
