//! Render command implementation.
//!
//! The render command:
//! 1. Loads statistics (API or local JSON files)
//! 2. Derives metrics and aggregates the chain distribution
//! 3. Generates the pie chart
//! 4. Writes output files
//! 5. Prints the text summary

use super::models::{RenderArgs, StatsSource};
use crate::api::{parse_chains, parse_snapshot, ApiClient, ChainProfile, StatsSnapshot};
use crate::chart::{generate_pie_chart, generate_text_summary};
use crate::output::{write_svg, write_view};
use crate::view::{build_view, to_document, StatView};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Execute the render command
///
/// Returns the rendered view so callers can inspect it.
///
/// # Errors
/// * API connection failures
/// * Payload parsing errors
/// * File write errors
pub fn execute_render(args: RenderArgs) -> Result<StatView> {
    let start_time = Instant::now();

    info!("Starting render from: {}", args.source.describe());

    // Step 1: Load statistics
    info!("Step 1/5: Loading statistics...");
    let (snapshot, profiles) = load_stats(&args.source)?;

    debug!(
        "Snapshot: {} blobs, {:.2} avg/block, {} wei; {} chain profiles",
        snapshot.total_blobs,
        snapshot.avg_blobs_per_block,
        snapshot.latest_gas_price,
        profiles.len()
    );

    // Step 2: Derive metrics and distribution
    info!("Step 2/5: Deriving metrics...");
    let view = build_view(&snapshot, &profiles, &args.protocol);

    info!(
        "Utilization {:.1}% | Saturation {:.1}% | Regime: {}",
        view.metrics.target_utilization_pct,
        view.metrics.saturation_pct,
        view.metrics.regime.label
    );

    // Step 3: Generate chart (if requested)
    let svg_content = match &args.output_svg {
        Some(_) if view.distribution.is_empty() => {
            warn!("Step 3/5: No chain data, skipping chart");
            None
        }
        Some(_) => {
            info!("Step 3/5: Generating pie chart...");
            let svg = generate_pie_chart(&view.distribution, args.chart_config.as_ref())
                .context("Failed to generate pie chart")?;
            Some(svg)
        }
        None => {
            info!("Step 3/5: Skipping chart generation (not requested)");
            None
        }
    };

    // Step 4: Write outputs
    info!("Step 4/5: Writing output files...");

    let document = to_document(view.clone(), args.source.describe(), args.protocol);
    write_view(&document, &args.output_json).context("Failed to write view JSON")?;

    info!("✓ View written to: {}", args.output_json.display());

    if let (Some(svg), Some(svg_path)) = (svg_content, &args.output_svg) {
        write_svg(&svg, svg_path).context("Failed to write chart SVG")?;

        info!("✓ Chart written to: {}", svg_path.display());
    }

    // Step 5: Print text summary (if requested)
    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("{}", generate_text_summary(&view, args.top_chains));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Render completed in {:.2}s", elapsed.as_secs_f64());

    Ok(view)
}

fn load_stats(source: &StatsSource) -> Result<(StatsSnapshot, Vec<ChainProfile>)> {
    match source {
        StatsSource::Api(base_url) => fetch_stats(base_url),
        StatsSource::Files { snapshot, chains } => {
            let snapshot = read_snapshot(snapshot)?;
            let profiles = match chains {
                Some(path) => read_chains(path)?,
                None => Vec::new(),
            };
            Ok((snapshot, profiles))
        }
    }
}

/// Fetch snapshot and chains from the API
///
/// A failing chains endpoint degrades to an empty distribution.
fn fetch_stats(base_url: &str) -> Result<(StatsSnapshot, Vec<ChainProfile>)> {
    let client = ApiClient::new(base_url).context("Failed to create API client")?;

    let snapshot = client
        .fetch_stats()
        .with_context(|| format!("Failed to fetch stats from {}", base_url))?;

    let profiles = match client.fetch_chains() {
        Ok(profiles) => profiles,
        Err(e) => {
            warn!("Chain breakdown unavailable: {}", e);
            Vec::new()
        }
    };

    Ok((snapshot, profiles))
}

fn read_snapshot(path: &Path) -> Result<StatsSnapshot> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file {}", path.display()))?;
    parse_snapshot(&contents)
        .with_context(|| format!("Failed to parse snapshot file {}", path.display()))
}

fn read_chains(path: &Path) -> Result<Vec<ChainProfile>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chains file {}", path.display()))?;
    parse_chains(&contents)
        .with_context(|| format!("Failed to parse chains file {}", path.display()))
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if let StatsSource::Api(url) = &args.source {
        if url.is_empty() {
            anyhow::bail!("API URL cannot be empty");
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("API URL must start with http:// or https://");
        }
    }

    if args.top_chains == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_chains > 1000 {
        anyhow::bail!("top is too large (max 1000)");
    }

    if let Some(config) = &args.chart_config {
        if config.width < 100 {
            anyhow::bail!("Chart width must be at least 100 pixels");
        }
    }

    args.protocol
        .validate()
        .context("Invalid protocol parameters")?;

    Ok(())
}
