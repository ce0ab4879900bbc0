//! Blob Stats Studio CLI
//!
//! Renders blob utilization metrics and per-chain distribution charts
//! from a statistics backend or local snapshot files.

use anyhow::{Context, Result};
use blob_stats_studio::chart::ChartConfig;
use blob_stats_studio::commands::{
    display_schema, display_version, execute_render, validate_args, validate_view_file,
    RenderArgs, StatsSource,
};
use blob_stats_studio::utils::config::{load_protocol, ProtocolParams, DEFAULT_API_URL};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Blob Stats Studio - Blob utilization and chain distribution views
#[derive(Parser, Debug)]
#[command(name = "blob-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive metrics and render the view
    Render {
        /// Statistics API base URL
        #[arg(short, long, env = "BLOB_STATS_API", default_value = DEFAULT_API_URL)]
        api: String,

        /// Read the stats snapshot from a JSON file instead of the API
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Chain breakdown JSON file (with --snapshot)
        #[arg(short, long, requires = "snapshot")]
        chains: Option<PathBuf>,

        /// Protocol parameters TOML file
        #[arg(short, long, conflicts_with = "pectra")]
        protocol: Option<PathBuf>,

        /// Use post-Pectra blob target and capacity (6 / 9)
        #[arg(long)]
        pectra: bool,

        /// Output path for the JSON view
        #[arg(short, long, default_value = "view.json")]
        output: PathBuf,

        /// Output path for the SVG pie chart (optional)
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Chart width in pixels
        #[arg(long, default_value = "640")]
        width: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of chains listed in the summary
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Validate a view JSON file
    Validate {
        /// Path to view JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Render {
            api,
            snapshot,
            chains,
            protocol,
            pectra,
            output,
            chart,
            title,
            width,
            summary,
            top,
        } => {
            let protocol = match protocol {
                Some(path) => load_protocol(&path).with_context(|| {
                    format!("Failed to load protocol parameters from {}", path.display())
                })?,
                None if pectra => ProtocolParams::pectra(),
                None => ProtocolParams::default(),
            };

            let source = match snapshot {
                Some(snapshot) => StatsSource::Files { snapshot, chains },
                None => StatsSource::Api(api),
            };

            let chart_config = chart.as_ref().map(|_| {
                let config = ChartConfig::new().with_width(width);
                match title {
                    Some(title) => config.with_title(title),
                    None => config,
                }
            });

            let args = RenderArgs {
                source,
                output_json: output,
                output_svg: chart,
                chart_config,
                print_summary: summary,
                top_chains: top,
                protocol,
            };

            validate_args(&args)?;
            execute_render(args)?;
        }

        Commands::Validate { file } => {
            validate_view_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
