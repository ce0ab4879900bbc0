//! Derive normalized ratios, classifications and display strings from a
//! statistics snapshot.
//!
//! Derivation is total: zero or missing counters produce zero-valued
//! outputs, never errors.

use super::format::{format_avg, format_bytes, format_gwei, format_number};
use super::levels::{saturation_level, utilization_level, Level};
use super::regime::{classify_regime, RegimeInfo};
use crate::api::StatsSnapshot;
use crate::utils::config::ProtocolParams;
use log::debug;
use serde::{Deserialize, Serialize};

/// Metrics derived from a single snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Average blobs per block used for every ratio (0 when absent)
    pub avg_blobs_per_block: f64,

    /// Average blobs per block against the target, unclamped
    pub target_utilization_pct: f64,

    /// Average blobs per block against the capacity, unclamped
    pub saturation_pct: f64,

    pub utilization_level: Level,
    pub saturation_level: Level,

    /// Current operating regime with its display info
    pub regime: RegimeInfo,

    /// Total blob payload in bytes
    pub total_size_bytes: u64,

    pub total_blobs_display: String,
    pub total_size_display: String,
    pub avg_blobs_display: String,
    pub gas_price_display: String,
}

/// Derive metrics with the built-in protocol constants
pub fn derive(snapshot: &StatsSnapshot) -> DerivedMetrics {
    derive_with(snapshot, &ProtocolParams::default())
}

/// Derive metrics with explicit protocol parameters
pub fn derive_with(snapshot: &StatsSnapshot, params: &ProtocolParams) -> DerivedMetrics {
    let avg_blobs = sanitize(snapshot.avg_blobs_per_block);

    let target_utilization_pct = avg_blobs / params.blob_target * 100.0;
    let saturation_pct = avg_blobs / params.blob_max * 100.0;
    let total_size_bytes = snapshot.total_blobs.saturating_mul(params.blob_size_bytes);

    let regime = classify_regime(avg_blobs, params).info();

    debug!(
        "Derived utilization {:.1}%, saturation {:.1}%, regime {:?}",
        target_utilization_pct, saturation_pct, regime.regime
    );

    DerivedMetrics {
        avg_blobs_per_block: avg_blobs,
        target_utilization_pct,
        saturation_pct,
        utilization_level: utilization_level(target_utilization_pct),
        saturation_level: saturation_level(saturation_pct),
        regime,
        total_size_bytes,
        total_blobs_display: format_number(snapshot.total_blobs),
        total_size_display: format_bytes(total_size_bytes),
        avg_blobs_display: format_avg(avg_blobs),
        gas_price_display: format_gwei(snapshot.latest_gas_price),
    }
}

/// Width of a progress bar fill, as a percentage clamped to [0, 100]
pub fn bar_fill_pct(value: f64, bar_max: f64) -> f64 {
    let pct = value / bar_max * 100.0;
    if pct.is_nan() {
        0.0
    } else {
        pct.clamp(0.0, 100.0)
    }
}

/// Treat non-finite averages as absent
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
