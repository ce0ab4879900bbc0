//! Renderable view model for the stats dashboard.
//!
//! `build_view` is pure: the same snapshot, chain list and parameters
//! always produce the same `StatView`.

use crate::api::{ChainProfile, StatsSnapshot};
use crate::distribution::{aggregate, ChainDistribution};
use crate::metrics::{bar_fill_pct, derive_with, DerivedMetrics};
use crate::utils::config::{
    ProtocolParams, SATURATION_BAR_MAX, UTILIZATION_BAR_MARKER, UTILIZATION_BAR_MAX,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs for one refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatView {
    pub metrics: DerivedMetrics,
    pub cards: Vec<StatCard>,
    pub distribution: ChainDistribution,
}

/// A single dashboard card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subtitle: Option<String>,

    /// Accent color name or `#rrggbb`
    pub color: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bar: Option<StatBar>,

    /// Tooltip text
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub info: Option<String>,
}

/// Horizontal progress bar attached to a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBar {
    /// Raw metric value (may exceed `max`)
    pub value: f64,
    pub max: f64,
    /// Fill width, clamped to [0, 100]
    pub fill_pct: f64,
    /// Marker position as a percentage of the bar width
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub marker_pct: Option<f64>,
}

impl StatBar {
    pub fn new(value: f64, max: f64) -> Self {
        Self {
            value,
            max,
            fill_pct: bar_fill_pct(value, max),
            marker_pct: None,
        }
    }

    pub fn with_marker(mut self, marker: f64) -> Self {
        self.marker_pct = Some(marker / self.max * 100.0);
        self
    }
}

impl StatCard {
    fn new(title: &str, value: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            subtitle: None,
            color: color.into(),
            bar: None,
            info: None,
        }
    }

    fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    fn bar(mut self, bar: StatBar) -> Self {
        self.bar = Some(bar);
        self
    }

    fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

/// Build the view for one snapshot and its chain breakdown
pub fn build_view(
    snapshot: &StatsSnapshot,
    profiles: &[ChainProfile],
    params: &ProtocolParams,
) -> StatView {
    let metrics = derive_with(snapshot, params);
    let distribution = aggregate(profiles);
    let cards = build_cards(&metrics, params);

    debug!(
        "Built view with {} cards and {} chain slices",
        cards.len(),
        distribution.len()
    );

    StatView {
        metrics,
        cards,
        distribution,
    }
}

fn build_cards(metrics: &DerivedMetrics, params: &ProtocolParams) -> Vec<StatCard> {
    let target = params.blob_target;
    let max = params.blob_max;

    vec![
        StatCard::new("Total Blobs", metrics.total_blobs_display.clone(), "cyan"),
        StatCard::new("Total Blob Size", metrics.total_size_display.clone(), "blue"),
        StatCard::new("Avg Blobs/Block", metrics.avg_blobs_display.clone(), "purple")
            .subtitle(format!("Target: {} | Max: {}", target, max)),
        StatCard::new(
            "Target Utilization",
            format!("{:.1}%", metrics.target_utilization_pct),
            metrics.utilization_level.color_name(),
        )
        .subtitle(format!("{} / {} blobs", short_avg(metrics), target))
        .bar(
            StatBar::new(metrics.target_utilization_pct, UTILIZATION_BAR_MAX)
                .with_marker(UTILIZATION_BAR_MARKER),
        )
        .info(format!(
            "Blobs vs target ({}). Can exceed 100% when blocks contain more than the target.",
            target
        )),
        StatCard::new(
            "Saturation Index",
            format!("{:.1}%", metrics.saturation_pct),
            metrics.saturation_level.color_name(),
        )
        .subtitle(format!("{} / {} blobs", short_avg(metrics), max))
        .bar(StatBar::new(metrics.saturation_pct, SATURATION_BAR_MAX))
        .info(format!("Blobs vs max capacity ({}).", max)),
        StatCard::new(
            "Current Regime",
            metrics.regime.label.clone(),
            metrics.regime.color.clone(),
        )
        .subtitle(metrics.regime.description.clone()),
        StatCard::new("Blob Gas Price", metrics.gas_price_display.clone(), "yellow"),
    ]
}

fn short_avg(metrics: &DerivedMetrics) -> String {
    format!("{:.1}", metrics.avg_blobs_per_block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_view_cards_in_order() {
        let view = build_view(
            &StatsSnapshot::new(1000, 4.0, 1e9),
            &[],
            &ProtocolParams::default(),
        );

        let titles: Vec<&str> = view.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Total Blobs",
                "Total Blob Size",
                "Avg Blobs/Block",
                "Target Utilization",
                "Saturation Index",
                "Current Regime",
                "Blob Gas Price",
            ]
        );
        assert!(view.distribution.is_empty());
    }

    #[test]
    fn test_utilization_bar_marker_and_clamp() {
        let view = build_view(
            &StatsSnapshot::new(0, 9.0, 0.0),
            &[],
            &ProtocolParams::default(),
        );

        let bar = view.cards[3].bar.as_ref().unwrap();
        assert_eq!(bar.value, 300.0);
        assert_eq!(bar.fill_pct, 100.0);
        assert_eq!(bar.marker_pct, Some(50.0));
    }

    #[test]
    fn test_regime_card_uses_custom_color() {
        let view = build_view(&StatsSnapshot::default(), &[], &ProtocolParams::default());
        let card = &view.cards[5];
        assert_eq!(card.value, "Under Target");
        assert_eq!(card.color, "#22c55e");
    }
}
