//! Statistics source: HTTP client and payload types.
//!
//! The backend serves pre-computed aggregates; nothing here derives metrics.

pub mod client;
pub mod types;

pub use client::{parse_chains, parse_snapshot, ApiClient};
pub use types::{ChainProfile, StatsSnapshot};
