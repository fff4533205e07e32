//! LearnBoard dashboard exporter
//!
//! Builds the demo dashboard from the static catalog and writes the KPI list
//! and chart descriptors as JSON for a rendering engine to consume.

use anyhow::Context;
use clap::Parser;
use learnboard_charts::{build_dashboard, DashboardConfig, StaticCatalog};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dashboard-export", about = "Export LearnBoard chart descriptors as JSON")]
struct Args {
    /// Output file for the descriptor JSON
    #[arg(short, long, default_value = "dashboard.json")]
    output: PathBuf,

    /// Seed for the synthetic engagement heatmap
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let catalog = StaticCatalog::default();
    let config = DashboardConfig {
        heatmap_seed: args.seed,
        ..DashboardConfig::default()
    };

    let dashboard = build_dashboard(&catalog, &config)
        .context("failed to build dashboard descriptors")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&dashboard)?
    } else {
        serde_json::to_string(&dashboard)?
    };
    std::fs::write(&args.output, json)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        path = %args.output.display(),
        charts = dashboard.charts.len(),
        kpis = dashboard.kpis.len(),
        "dashboard exported"
    );
    Ok(())
}
