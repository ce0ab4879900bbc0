//! Threshold tables that bucket utilization and saturation percentages.

use serde::{Deserialize, Serialize};

/// Load level of a percentage metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Nominal,
    Elevated,
    High,
    Critical,
}

impl Level {
    /// Accent color name used by the stat cards
    pub fn color_name(self) -> &'static str {
        match self {
            Level::Low => "green",
            Level::Nominal => "blue",
            Level::Elevated => "amber",
            Level::High => "orange",
            Level::Critical => "red",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Level::Low => "#22c55e",
            Level::Nominal => "#3b82f6",
            Level::Elevated => "#f59e0b",
            Level::High => "#f97316",
            Level::Critical => "#ef4444",
        }
    }
}

/// `(upper bound inclusive, level)`, ascending; the last bound is infinite
pub type LevelTable = [(f64, Level)];

pub const UTILIZATION_LEVELS: &LevelTable = &[
    (50.0, Level::Low),
    (90.0, Level::Nominal),
    (120.0, Level::Elevated),
    (150.0, Level::High),
    (f64::INFINITY, Level::Critical),
];

pub const SATURATION_LEVELS: &LevelTable = &[
    (33.0, Level::Low),
    (66.0, Level::Elevated),
    (90.0, Level::High),
    (f64::INFINITY, Level::Critical),
];

/// Look up the level for a percentage
///
/// NaN falls through every bound and is reported as the last level.
pub fn classify(value: f64, table: &LevelTable) -> Level {
    table
        .iter()
        .find(|(upper, _)| value <= *upper)
        .or_else(|| table.last())
        .map(|(_, level)| *level)
        .unwrap_or(Level::Critical)
}

pub fn utilization_level(pct: f64) -> Level {
    classify(pct, UTILIZATION_LEVELS)
}

pub fn saturation_level(pct: f64) -> Level {
    classify(pct, SATURATION_LEVELS)
}
