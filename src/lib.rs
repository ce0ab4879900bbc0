//! Blob Stats Studio
//!
//! Derived metrics and chart data for Ethereum blob statistics:
//! target utilization, saturation, operating regime, formatted sizes and
//! prices, and a ranked per-chain distribution.
//!
//! This crate provides the core implementation for the
//! `blob-stats` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install blob-stats-studio
//! blob-stats render --api http://localhost:3000 --chart chains.svg --summary
//! ```
//!
//! As a library:
//!
//! ```ignore
//! use blob_stats_studio::{build_view, ProtocolParams, StatsSnapshot};
//!
//! let snapshot = StatsSnapshot::new(1000, 4.0, 1e9);
//! let view = build_view(&snapshot, &[], &ProtocolParams::default());
//! assert_eq!(view.metrics.gas_price_display, "1.00 Gwei");
//! ```

pub mod api;
pub mod chart;
pub mod commands;
pub mod distribution;
pub mod metrics;
pub mod output;
pub mod utils;
pub mod view;

pub use api::{ChainProfile, StatsSnapshot};
pub use distribution::{aggregate, ChainDistribution, ChainShare};
pub use metrics::{derive, derive_with, DerivedMetrics};
pub use utils::config::ProtocolParams;
pub use view::{build_view, StatView};
