//! weather-routes — demo driver for the weather_routes workspace.
//!
//! Loads a route file (first CLI argument) or the built-in sample, then for
//! every weather condition prints the shortest route for a fixed city pair,
//! the graph center, and the distance table.  Finally it picks a weather
//! from a temperature and exports that distance table as CSV.
//!
//! Set `RUST_LOG=debug` to see every recomputation.

mod routes;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wr_core::Weather;
use wr_graph::WeatherGraph;
use wr_io::{load_routes_path, load_routes_reader, write_distance_table_path};

use routes::{QUERY, SAMPLE_ROUTES};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:       &str = "output/weather-routes";
const DEMO_TEMPERATURE: f64  = 3.5; // °C → snow

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== weather-routes ===");

    // 1. Load routes.
    let mut graph = WeatherGraph::new();
    let source: Option<PathBuf> = std::env::args_os().nth(1).map(PathBuf::from);
    let summary = match &source {
        Some(path) => load_routes_path(path, &mut graph)
            .with_context(|| format!("loading {}", path.display()))?,
        None => load_routes_reader(Cursor::new(SAMPLE_ROUTES), &mut graph)?,
    };
    println!(
        "Loaded {} routes between {} cities from {}",
        summary.records,
        graph.city_count(),
        source.as_deref().map_or("built-in sample".into(), |p| p.display().to_string()),
    );
    println!();

    // 2. Query every weather.
    let (origin, destination) = if source.is_some() {
        first_and_last(&graph).context("route file defines no cities")?
    } else {
        (QUERY.0.to_owned(), QUERY.1.to_owned())
    };

    for weather in Weather::ALL {
        let t0 = Instant::now();
        graph.set_weather(weather);
        info!(%weather, elapsed_us = t0.elapsed().as_micros() as u64, "weather applied");

        println!("── {weather} ──");
        match graph.shortest_route(&origin, &destination)? {
            Some(route) => println!(
                "  {origin} → {destination}: {} (cost {}, {} hops)",
                route.cities.join(" → "),
                route.cost,
                route.hops(),
            ),
            None => println!("  {origin} → {destination}: no route"),
        }
        println!("  center: {}", graph.graph_center()?);
        println!();
        print!("{}", graph.distance_table());
        println!();
    }

    // 3. Temperature-driven weather + CSV export.
    let weather = graph.set_weather_by_temperature(DEMO_TEMPERATURE)?;
    println!("{DEMO_TEMPERATURE} °C → {weather}");

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let out = Path::new(OUTPUT_DIR).join(format!("distances_{weather}.csv"));
    write_distance_table_path(&graph.distance_table(), &out)?;
    println!("Distance table written to {}", out.display());

    Ok(())
}

/// First and last registered city, used as the query pair for user files.
fn first_and_last(graph: &WeatherGraph) -> Option<(String, String)> {
    let first = graph.city_names().next()?;
    let last = graph.city_names().last()?;
    Some((first.to_owned(), last.to_owned()))
}
