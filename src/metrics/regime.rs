//! Coarse operating regime of the blob market.
//!
//! Regimes are half-open bands `[lower, upper)` of average blobs per block.
//! The bands are derived from the protocol target and capacity and always
//! cover the whole real line without gaps.

use crate::utils::config::ProtocolParams;
use serde::{Deserialize, Serialize};

/// Named operating regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    UnderTarget,
    Balanced,
    Elevated,
    Saturated,
}

/// Display information for a regime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeInfo {
    pub regime: Regime,
    pub label: String,
    pub description: String,
    pub color: String,
}

impl Regime {
    pub fn info(self) -> RegimeInfo {
        let (label, description, color) = match self {
            Regime::UnderTarget => (
                "Under Target",
                "Demand below target, blob fees falling",
                "#22c55e",
            ),
            Regime::Balanced => (
                "Balanced",
                "Demand near target, blob fees stable",
                "#3b82f6",
            ),
            Regime::Elevated => (
                "Elevated",
                "Demand above target, blob fees rising",
                "#f59e0b",
            ),
            Regime::Saturated => (
                "Saturated",
                "Blocks near capacity, blob fees climbing fast",
                "#ef4444",
            ),
        };

        RegimeInfo {
            regime: self,
            label: label.to_string(),
            description: description.to_string(),
            color: color.to_string(),
        }
    }
}

/// One band of the regime table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeBand {
    pub regime: Regime,
    /// Inclusive lower bound (blobs per block)
    pub lower: f64,
    /// Exclusive upper bound (blobs per block)
    pub upper: f64,
}

impl RegimeBand {
    pub fn contains(&self, avg_blobs: f64) -> bool {
        avg_blobs >= self.lower && avg_blobs < self.upper
    }
}

// Band edges as multiples of the target (first two) and of the capacity
const UNDER_TARGET_RATIO: f64 = 0.9;
const BALANCED_RATIO: f64 = 1.1;
const SATURATED_RATIO: f64 = 0.9;

/// Build the regime table for the given protocol parameters
///
/// Edges are clamped to be non-decreasing so an unusual parameter set can
/// collapse a band to empty but never open a gap.
pub fn regime_bands(params: &ProtocolParams) -> [RegimeBand; 4] {
    let under = params.blob_target * UNDER_TARGET_RATIO;
    let balanced = (params.blob_target * BALANCED_RATIO).max(under);
    let elevated = (params.blob_max * SATURATED_RATIO).max(balanced);

    [
        RegimeBand {
            regime: Regime::UnderTarget,
            lower: f64::NEG_INFINITY,
            upper: under,
        },
        RegimeBand {
            regime: Regime::Balanced,
            lower: under,
            upper: balanced,
        },
        RegimeBand {
            regime: Regime::Elevated,
            lower: balanced,
            upper: elevated,
        },
        RegimeBand {
            regime: Regime::Saturated,
            lower: elevated,
            upper: f64::INFINITY,
        },
    ]
}

/// Classify average blobs per block into a regime
pub fn classify_regime(avg_blobs: f64, params: &ProtocolParams) -> Regime {
    regime_bands(params)
        .iter()
        .find(|band| band.contains(avg_blobs))
        .map(|band| band.regime)
        // Only NaN and +inf miss every band
        .unwrap_or(Regime::Saturated)
}
