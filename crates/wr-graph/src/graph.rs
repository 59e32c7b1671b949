//! The weather-weighted city graph.
//!
//! `WeatherGraph` owns the registry, the per-weather weight matrices, and the
//! shortest-path engine.  Every mutator recomputes the engine before it
//! returns, so all read operations see tables that match the current
//! topology and weather.
//!
//! # Concurrency
//!
//! The graph is plain owned data (`Send + Sync`).  Share it across threads
//! behind a single `Mutex`/`RwLock`: a recomputation rewrites both tables
//! wholesale, so there is no finer-grained locking to be had.

use tracing::debug;

use wr_core::{CityId, GraphConfig, Weather, WeatherCosts, WeatherThresholds};

use crate::engine::ShortestPathEngine;
use crate::registry::CityRegistry;
use crate::weights::WeightMatrices;
use crate::GraphResult;

/// Directed city graph with one cost layer per [`Weather`].
///
/// # Example
///
/// ```
/// use wr_core::WeatherCosts;
/// use wr_graph::WeatherGraph;
///
/// let mut g = WeatherGraph::new();
/// g.add_or_update_edge("A", "B", WeatherCosts::new([10, 15, 20, 25]));
/// g.add_or_update_edge("B", "C", WeatherCosts::new([10, 15, 20, 25]));
/// assert_eq!(g.path_cost("A", "C").unwrap(), Some(20));
/// assert_eq!(g.shortest_path("A", "C").unwrap(), ["A", "B", "C"]);
/// ```
#[derive(Clone, Debug)]
pub struct WeatherGraph {
    pub(crate) registry:    CityRegistry,
    pub(crate) weights:     WeightMatrices,
    pub(crate) engine:      ShortestPathEngine,
    weather:                Weather,
    temperature:            Option<f64>,
    thresholds:             WeatherThresholds,
}

impl WeatherGraph {
    /// Empty graph with the default [`GraphConfig`].
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            registry:    CityRegistry::new(),
            weights:     WeightMatrices::new(),
            engine:      ShortestPathEngine::new(),
            weather:     config.initial_weather,
            temperature: None,
            thresholds:  config.thresholds,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The active weather condition.
    pub fn weather(&self) -> Weather {
        self.weather
    }

    /// Temperature passed to the last
    /// [`set_weather_by_temperature`](Self::set_weather_by_temperature),
    /// cleared by any direct weather selection.
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub fn thresholds(&self) -> WeatherThresholds {
        self.thresholds
    }

    pub fn registry(&self) -> &CityRegistry {
        &self.registry
    }

    pub fn city_exists(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn city_count(&self) -> usize {
        self.registry.len()
    }

    /// City names in registry (id) order.
    pub fn city_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.registry.names()
    }

    // ── Topology mutators ─────────────────────────────────────────────────

    /// Register `name` and return its id.  Idempotent: an existing city keeps
    /// its id and nothing is recomputed.
    pub fn add_city(&mut self, name: &str) -> CityId {
        let (id, grew) = self.register(name);
        if grew {
            self.recompute();
        }
        id
    }

    /// Install `costs` on the directed edge `origin → destination`,
    /// registering either endpoint if needed.
    ///
    /// Returns the costs previously installed on that edge, if any.  Costs
    /// are taken as given; use [`WeatherCosts::non_negative`] to validate
    /// untrusted input.
    pub fn add_or_update_edge(
        &mut self,
        origin: &str,
        destination: &str,
        costs: WeatherCosts,
    ) -> Option<WeatherCosts> {
        let previous = self.install_edge(origin, destination, costs);
        self.recompute();
        previous
    }

    /// Install many edges with a single recomputation at the end.
    ///
    /// Returns the number of edges installed.
    pub fn extend_edges<I, S>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = (S, S, WeatherCosts)>,
        S: AsRef<str>,
    {
        let mut count = 0;
        for (origin, destination, costs) in edges {
            self.install_edge(origin.as_ref(), destination.as_ref(), costs);
            count += 1;
        }
        self.recompute();
        count
    }

    /// Remove the edge `origin → destination` under every weather.
    ///
    /// Both cities must already exist.  Returns the costs that were removed,
    /// `None` if there was no edge.
    pub fn remove_edge(
        &mut self,
        origin: &str,
        destination: &str,
    ) -> GraphResult<Option<WeatherCosts>> {
        let from = self.registry.id_of(origin)?;
        let to = self.registry.id_of(destination)?;
        let previous = self.weights.edge(from, to);
        self.weights.clear(from, to);
        debug!(origin, destination, removed = previous.is_some(), "edge removed");
        self.recompute();
        Ok(previous)
    }

    // ── Weather selection ─────────────────────────────────────────────────

    /// Activate `weather` and forget any stored temperature.
    pub fn set_weather(&mut self, weather: Weather) {
        self.weather = weather;
        self.temperature = None;
        self.recompute();
    }

    /// Activate the weather with integer code `code` (0–3).
    pub fn set_weather_by_code(&mut self, code: u8) -> GraphResult<()> {
        let weather = Weather::from_code(code)?;
        self.set_weather(weather);
        Ok(())
    }

    /// Activate the weather banded from `celsius` by the configured
    /// thresholds, and remember the temperature.
    pub fn set_weather_by_temperature(&mut self, celsius: f64) -> GraphResult<Weather> {
        let weather = self.thresholds.classify(celsius)?;
        self.weather = weather;
        self.temperature = Some(celsius);
        self.recompute();
        Ok(weather)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Register without recomputing.  Grows all layers in lockstep.
    fn register(&mut self, name: &str) -> (CityId, bool) {
        let (id, grew) = self.registry.add(name);
        if grew {
            self.weights.grow(self.registry.len());
            self.engine.invalidate();
            debug!(city = name, %id, "city registered");
        }
        (id, grew)
    }

    fn install_edge(
        &mut self,
        origin: &str,
        destination: &str,
        costs: WeatherCosts,
    ) -> Option<WeatherCosts> {
        let (from, _) = self.register(origin);
        let (to, _) = self.register(destination);
        let previous = self.weights.edge(from, to);
        self.weights.set(from, to, costs);
        self.engine.invalidate();
        debug!(origin, destination, ?costs, "edge installed");
        previous
    }

    /// Full Floyd-Warshall pass over the active layer.
    fn recompute(&mut self) {
        let n = self.registry.len();
        debug_assert_eq!(self.weights.dimension(), n);
        self.engine.invalidate();
        self.engine.recompute(self.weights.layer(self.weather), n);
        debug!(cities = n, weather = %self.weather, "shortest paths recomputed");
    }
}

impl Default for WeatherGraph {
    fn default() -> Self {
        Self::new()
    }
}
