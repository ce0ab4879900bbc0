use crate::chart::ChartConfig;
use crate::utils::config::{ProtocolParams, DEFAULT_API_URL};
use std::path::PathBuf;

/// Where statistics are loaded from
#[derive(Debug, Clone)]
pub enum StatsSource {
    /// Statistics backend base URL
    Api(String),

    /// Local JSON files (chains optional)
    Files {
        snapshot: PathBuf,
        chains: Option<PathBuf>,
    },
}

impl StatsSource {
    /// Short description recorded in the output document
    pub fn describe(&self) -> String {
        match self {
            StatsSource::Api(url) => url.clone(),
            StatsSource::Files { snapshot, chains } => match chains {
                Some(chains) => format!("{} + {}", snapshot.display(), chains.display()),
                None => snapshot.display().to_string(),
            },
        }
    }
}

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Statistics source
    pub source: StatsSource,

    /// Output path for the JSON view document
    pub output_json: PathBuf,

    /// Output path for the SVG pie chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Chart configuration
    pub chart_config: Option<ChartConfig>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of chains listed in the text summary
    pub top_chains: usize,

    /// Protocol parameters for derivation
    pub protocol: ProtocolParams,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            source: StatsSource::Api(DEFAULT_API_URL.to_string()),
            output_json: PathBuf::from("view.json"),
            output_svg: None,
            chart_config: None,
            print_summary: false,
            top_chains: 10,
            protocol: ProtocolParams::default(),
        }
    }
}
