use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use moma_tour::cli::Args;
use moma_tour::utils::logging::{create_load_spinner, finish_progress_bar};
use moma_tour::{ArtworkCollection, Dashboard, LoaderConfig, async_io};

async fn load(path: &Path, config: &LoaderConfig) -> Result<ArtworkCollection> {
    let spinner = create_load_spinner(path);
    let dataset = if path.is_dir() {
        async_io::load_dataset_dir_async(path, config).await
    } else {
        async_io::load_dataset_async(path, config).await
    }
    .with_context(|| format!("Failed to load dataset from {}", path.display()))?;
    finish_progress_bar(&spinner, Some("Dataset loaded"));
    Ok(dataset)
}

fn write_json(dir: &Path, name: &str, json: &str) -> Result<()> {
    let path = dir.join(format!("{name}.json"));
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let start = Instant::now();
    let dataset = load(&args.data, &args.loader_config()).await?;
    if dataset.iter().next().is_none() {
        warn!("Dataset at {} contains no records", args.data.display());
    }

    let dashboard = Dashboard::new(dataset, args.dashboard_config());

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    for (name, chart) in dashboard.static_chart_specs() {
        write_json(&args.out_dir, name, &chart.to_json()?)?;
    }

    let selection = args.selection();
    let outputs = dashboard.update(&selection);
    for (name, chart) in outputs.charts() {
        write_json(&args.out_dir, name, &chart.to_json()?)?;
    }
    write_json(
        &args.out_dir,
        "statistics",
        &serde_json::to_string_pretty(&outputs.statistics)?,
    )?;
    write_json(
        &args.out_dir,
        "countries",
        &serde_json::to_string_pretty(dashboard.country_options())?,
    )?;

    let stats = &outputs.statistics;
    info!(
        "Artists: {}, artworks: {}, male: {}, female: {}",
        stats.artists, stats.artworks, stats.male, stats.female
    );
    info!(
        "Wrote charts to {} in {:?}",
        args.out_dir.display(),
        start.elapsed()
    );

    Ok(())
}
