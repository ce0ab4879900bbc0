//! Metric derivation from aggregate blob statistics.
//!
//! This module turns a statistics snapshot into:
//! - Target utilization and saturation percentages
//! - Level buckets and the current operating regime
//! - Formatted display strings (sizes, Gwei prices, counts)

pub mod deriver;
pub mod format;
pub mod levels;
pub mod regime;

// Re-export main types and functions
pub use deriver::{bar_fill_pct, derive, derive_with, DerivedMetrics};
pub use format::{format_avg, format_bytes, format_gwei, format_number};
pub use levels::{saturation_level, utilization_level, Level};
pub use regime::{classify_regime, regime_bands, Regime, RegimeBand, RegimeInfo};
