//! Per-chain blob distribution for chart rendering.
//!
//! Shares are ranked by blob count and colored along a fixed ramp by rank,
//! not by chain identity.

pub mod aggregator;
pub mod chains;
pub mod ramp;

pub use aggregator::{aggregate, ChainDistribution, ChainShare};
pub use chains::display_name;
pub use ramp::{ramp_color, Rgb, RAMP_STOPS};
