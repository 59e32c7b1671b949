//! All-pairs shortest paths via Floyd-Warshall.
//!
//! # State
//!
//! The engine is either `Stale` (the weights changed since the last run) or
//! `Fresh`.  [`WeatherGraph`](crate::WeatherGraph) invalidates and recomputes
//! inline on every mutation, so callers of the graph only ever see `Fresh`
//! tables.
//!
//! # Tables
//!
//! Both tables are row-major `n × n`:
//!
//! - `dist[i*n + j]`: shortest cost from `i` to `j`, [`INFINITY`] if
//!   unreachable.
//! - `pred[i*n + j]`: the vertex preceding `j` on that path, or
//!   `CityId::INVALID` when `i == j` or no path exists.
//!
//! # Diagonal
//!
//! `dist[i*n + i]` starts at 0 unless the layer holds a finite self-loop
//! cost for `i`, which then overrides it.
//!
//! # Cost
//!
//! O(n³) time and O(n²) space per run.  Tables are rebuilt from scratch each
//! time; the intended graphs hold dozens of cities.

use tracing::warn;

use wr_core::{CityId, Cost, INFINITY, is_finite};

use crate::registry::id_at;

/// Freshness of the distance / predecessor tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Weights changed since the last [`recompute`](ShortestPathEngine::recompute).
    Stale,
    /// Tables match the weights they were computed from.
    Fresh,
}

/// Distance and predecessor tables for one weight layer.
#[derive(Clone, Debug)]
pub struct ShortestPathEngine {
    n:     usize,
    dist:  Vec<Cost>,
    pred:  Vec<CityId>,
    state: EngineState,
}

impl ShortestPathEngine {
    /// Engine for the empty graph (trivially fresh).
    pub fn new() -> Self {
        Self { n: 0, dist: Vec::new(), pred: Vec::new(), state: EngineState::Fresh }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_fresh(&self) -> bool {
        self.state == EngineState::Fresh
    }

    /// Mark the tables as out of date.
    pub fn invalidate(&mut self) {
        self.state = EngineState::Stale;
    }

    /// Dimension of the last computed tables.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Discard both tables and rebuild them from the row-major `n × n`
    /// weight `layer`.
    pub fn recompute(&mut self, layer: &[Cost], n: usize) {
        debug_assert_eq!(layer.len(), n * n);

        let mut dist = layer.to_vec();
        let mut pred = vec![CityId::INVALID; n * n];

        for i in 0..n {
            for j in 0..n {
                let at = i * n + j;
                if !is_finite(dist[at]) {
                    dist[at] = if i == j { 0 } else { INFINITY };
                } else if i != j {
                    pred[at] = id_at(i);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if !is_finite(d_ik) {
                    continue;
                }
                for j in 0..n {
                    let d_kj = dist[k * n + j];
                    if !is_finite(d_kj) {
                        continue;
                    }
                    // Sums that reach INFINITY never compare below a stored
                    // cell, which is capped at INFINITY.
                    let through = d_ik.saturating_add(d_kj);
                    if through < dist[i * n + j] {
                        dist[i * n + j] = through;
                        pred[i * n + j] = pred[k * n + j];
                    }
                }
            }
        }

        self.n = n;
        self.dist = dist;
        self.pred = pred;
        self.state = EngineState::Fresh;
    }

    // ── Table access ──────────────────────────────────────────────────────

    /// Raw table cell, [`INFINITY`] when unreachable.
    #[inline]
    pub fn raw_distance(&self, origin: CityId, destination: CityId) -> Cost {
        debug_assert!(self.is_fresh());
        self.dist[origin.index() * self.n + destination.index()]
    }

    /// Shortest cost, or `None` if there is no path.
    pub fn distance(&self, origin: CityId, destination: CityId) -> Option<Cost> {
        let d = self.raw_distance(origin, destination);
        is_finite(d).then_some(d)
    }

    /// Vertex preceding `destination` on the shortest path from `origin`.
    pub fn predecessor(&self, origin: CityId, destination: CityId) -> Option<CityId> {
        let p = self.pred[origin.index() * self.n + destination.index()];
        p.is_valid().then_some(p)
    }

    /// Row `origin` of the distance table.
    pub fn row(&self, origin: CityId) -> &[Cost] {
        let start = origin.index() * self.n;
        &self.dist[start..start + self.n]
    }

    // ── Derived queries ───────────────────────────────────────────────────

    /// Vertices on the shortest path, `origin` first and `destination` last.
    ///
    /// `[origin]` when both ends coincide; empty when `destination` is
    /// unreachable.
    pub fn path(&self, origin: CityId, destination: CityId) -> Vec<CityId> {
        if origin == destination {
            return vec![origin];
        }
        if self.distance(origin, destination).is_none() {
            return Vec::new();
        }

        let mut path = vec![destination];
        let mut cur = destination;
        while cur != origin {
            let Some(prev) = self.predecessor(origin, cur) else {
                warn!(%origin, %destination, "broken predecessor chain");
                return Vec::new();
            };
            // A chain longer than n vertices revisits a vertex: only reachable
            // through a negative cycle.
            if path.len() > self.n {
                warn!(%origin, %destination, "predecessor cycle; negative-cost cycle in graph?");
                return Vec::new();
            }
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }

    /// Largest entry of row `origin`, [`INFINITY`] if any city is unreachable.
    pub fn eccentricity(&self, origin: CityId) -> Cost {
        self.row(origin).iter().copied().max().unwrap_or(INFINITY)
    }

    /// The city with the strictly smallest eccentricity; ties go to the
    /// lowest id.  `None` for the empty graph.
    pub fn center(&self) -> Option<CityId> {
        let mut best: Option<(CityId, Cost)> = None;
        for i in 0..self.n {
            let id = id_at(i);
            let ecc = self.eccentricity(id);
            match best {
                Some((_, best_ecc)) if ecc >= best_ecc => {}
                _ => best = Some((id, ecc)),
            }
        }
        best.map(|(id, _)| id)
    }
}

impl Default for ShortestPathEngine {
    fn default() -> Self {
        Self::new()
    }
}
