//! TopoViz - Command-Line Entry Point
//!
//! Offline companion to the console: reads a topology report and a metrics
//! report captured from the engine's status endpoints and prints the
//! computed render graph plus aggregate metrics as JSON.

use clap::Parser;
use std::path::PathBuf;
use topoviz_rs::descriptor::{load_metrics, load_topology};
use topoviz_rs::{compute_aggregate_metrics, compute_topology_layout};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Compute a pipeline render graph from captured engine reports.
#[derive(Parser)]
#[command(name = "topoviz", version, about)]
struct Args {
    /// Path to the topology report (JSON: sources + edges)
    topology: PathBuf,

    /// Path to the metrics report (JSON: flat counter object)
    metrics: PathBuf,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,topoviz_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let topology = load_topology(&args.topology)?;
    let metrics = load_metrics(&args.metrics)?;
    tracing::info!(
        sources = topology.sources.len(),
        adjacency_entries = topology.edges.len(),
        counters = metrics.len(),
        "loaded engine reports"
    );

    let graph = compute_topology_layout(&topology, &metrics);
    let totals = compute_aggregate_metrics(&metrics);

    let output = serde_json::json!({
        "graph": graph,
        "aggregate": totals,
    });
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string(&output)?);
    }

    Ok(())
}
