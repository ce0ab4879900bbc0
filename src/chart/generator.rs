//! SVG pie chart and terminal summary generation.
//!
//! The pie is drawn by hand rather than through a plotting crate:
//! - Slices start at 12 o'clock and run clockwise in rank order
//! - Each slice uses the ramp color assigned by the aggregator
//! - A legend lists every chain with its count and share

use crate::distribution::{display_name, ChainDistribution, Rgb};
use crate::metrics::format_number;
use crate::utils::error::ChartError;
use crate::view::{StatCard, StatView};
use colored::{Color, Colorize};
use log::info;
use std::f64::consts::PI;

/// Pie chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Blobs by Chain".to_string(),
            width: 640,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

const TITLE_HEIGHT: f64 = 40.0;
const LEGEND_ROW_HEIGHT: f64 = 22.0;
const PADDING: f64 = 20.0;
// Inner radius of the donut hole as a fraction of the outer radius
const HOLE_RATIO: f64 = 0.55;

/// Generate an SVG pie chart from a chain distribution
pub fn generate_pie_chart(
    distribution: &ChainDistribution,
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    if distribution.is_empty() {
        return Err(ChartError::EmptyDistribution);
    }

    let config = config.cloned().unwrap_or_default();
    info!("Generating pie chart with {} slices", distribution.len());

    let width = config.width as f64;
    // Pie takes the left half, legend the right half
    let radius = ((width / 2.0) - 2.0 * PADDING).max(20.0) / 2.0;
    let cx = PADDING + radius;
    let cy = TITLE_HEIGHT + PADDING + radius;

    let legend_height = distribution.len() as f64 * LEGEND_ROW_HEIGHT;
    let height = TITLE_HEIGHT + 2.0 * PADDING + (2.0 * radius).max(legend_height);

    let mut svg = String::new();

    // Header
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = config.width,
        h = height.ceil() as usize
    ));

    svg.push_str(
        r#"<style>.slice:hover { opacity: 0.85; cursor: pointer; } .label { font: 12px sans-serif; }</style>"#,
    );

    // Title
    svg.push_str(&format!(
        r#"<text x="{}" y="26" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape_xml(&config.title)
    ));

    render_slices(distribution, cx, cy, radius, &mut svg);

    // Donut hole with the grand total
    svg.push_str(&format!(
        r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="white"/>"#,
        cx,
        cy,
        radius * HOLE_RATIO
    ));
    svg.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="14" text-anchor="middle" font-weight="bold">{}</text>"#,
        cx,
        cy + 5.0,
        format_number(distribution.total)
    ));

    render_legend(distribution, width / 2.0, TITLE_HEIGHT + PADDING, &mut svg);

    svg.push_str("</svg>");

    info!("Pie chart generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

fn render_slices(
    distribution: &ChainDistribution,
    cx: f64,
    cy: f64,
    radius: f64,
    out: &mut String,
) {
    let total = distribution.total.max(1) as f64;

    // A lone slice cannot be drawn as an arc
    if let [only] = distribution.entries.as_slice() {
        out.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" class="slice"><title>{}</title></circle>"#,
            cx,
            cy,
            radius,
            only.color,
            slice_title(&only.chain, only.count, only.percentage)
        ));
        return;
    }

    let mut start = -PI / 2.0;
    for entry in &distribution.entries {
        let sweep = entry.count as f64 / total * 2.0 * PI;
        let end = start + sweep;

        let (x1, y1) = polar(cx, cy, radius, start);
        let (x2, y2) = polar(cx, cy, radius, end);
        let large_arc = if sweep > PI { 1 } else { 0 };

        out.push_str(&format!(
            r#"<path d="M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z" fill="{}" stroke="white" stroke-width="1" class="slice"><title>{}</title></path>"#,
            cx,
            cy,
            x1,
            y1,
            radius,
            radius,
            large_arc,
            x2,
            y2,
            entry.color,
            slice_title(&entry.chain, entry.count, entry.percentage)
        ));

        start = end;
    }
}

fn render_legend(distribution: &ChainDistribution, x: f64, top: f64, out: &mut String) {
    for (i, entry) in distribution.entries.iter().enumerate() {
        let y = top + i as f64 * LEGEND_ROW_HEIGHT;
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="14" height="14" fill="{}" rx="2"/>"#,
            x, y, entry.color
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="label">{} - {} ({:.1}%)</text>"#,
            x + 20.0,
            y + 12.0,
            escape_xml(&display_name(&entry.chain)),
            format_number(entry.count),
            entry.percentage
        ));
    }
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

fn slice_title(chain: &str, count: u64, percentage: f64) -> String {
    format!(
        "{}: {} blobs ({:.1}%)",
        escape_xml(&display_name(chain)),
        format_number(count),
        percentage
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const BAR_WIDTH: usize = 30;

/// Create a text summary of the cards and the chain table for the terminal
pub fn generate_text_summary(view: &StatView, max_chains: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  📊 {}", "BLOB STATISTICS".bold()));
    lines.push(format!("  {}", "━".repeat(64)));

    for card in &view.cards {
        lines.push(render_card_line(card));
    }

    lines.push(String::new());

    let distribution = &view.distribution;
    lines.push(format!(
        "  🔗 {} ({} blobs)",
        "CHAIN DISTRIBUTION".bold(),
        format_number(distribution.total)
    ));
    lines.push(format!("  {}", "━".repeat(64)));

    if distribution.is_empty() {
        lines.push("  (no chain data)".to_string());
        return lines.join("\n");
    }

    lines.push(format!(
        "  {:<20} {:>14} {:>8}  {}",
        "Chain", "Blobs", "Share", ""
    ));

    for entry in distribution.entries.iter().take(max_chains) {
        let color = Rgb::from_hex(&entry.color)
            .map(|c| Color::TrueColor { r: c.r, g: c.g, b: c.b })
            .unwrap_or(Color::White);
        let bar = "█".repeat(scaled_width(entry.percentage, BAR_WIDTH));

        lines.push(format!(
            "  {} {:>14} {:>7.1}%  {}",
            format!("{:<20}", truncate(&display_name(&entry.chain), 20)).color(color),
            format_number(entry.count),
            entry.percentage,
            bar.color(color)
        ));
    }

    if distribution.len() > max_chains {
        lines.push(String::new());
        lines.push(format!(
            "   (Showing top {} of {} chains)",
            max_chains,
            distribution.len()
        ));
    }

    lines.join("\n")
}

fn render_card_line(card: &StatCard) -> String {
    let color = card_color(&card.color);
    let mut line = format!(
        "  {:<20} {}",
        card.title,
        format!("{:<14}", card.value).color(color).bold()
    );

    if let Some(bar) = &card.bar {
        let filled = scaled_width(bar.fill_pct, BAR_WIDTH);
        let mut cells: Vec<char> = "█".repeat(filled).chars().collect();
        cells.extend(std::iter::repeat('░').take(BAR_WIDTH - filled));

        if let Some(marker) = bar.marker_pct {
            let idx = scaled_width(marker, BAR_WIDTH).min(BAR_WIDTH - 1);
            cells[idx] = '│';
        }

        let cells: String = cells.into_iter().collect();
        line.push_str(&format!(" {}", cells.color(color)));
    }

    if let Some(subtitle) = &card.subtitle {
        line.push_str(&format!("  {}", subtitle.dimmed()));
    }

    line
}

/// Map a card color (accent name or `#rrggbb`) to a terminal color
fn card_color(color: &str) -> Color {
    if let Some(rgb) = Rgb::from_hex(color) {
        return Color::TrueColor {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        };
    }

    match color {
        "green" => Color::Green,
        "blue" => Color::Blue,
        "cyan" => Color::Cyan,
        "purple" => Color::Magenta,
        "yellow" | "amber" => Color::Yellow,
        "orange" => Color::TrueColor {
            r: 249,
            g: 115,
            b: 22,
        },
        "red" => Color::Red,
        _ => Color::White,
    }
}

/// Number of cells for a percentage of `width`, clamped to `width`
fn scaled_width(pct: f64, width: usize) -> usize {
    if !pct.is_finite() || pct <= 0.0 {
        return 0;
    }
    ((pct / 100.0 * width as f64).round() as usize).min(width)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_width() {
        assert_eq!(scaled_width(0.0, 30), 0);
        assert_eq!(scaled_width(50.0, 30), 15);
        assert_eq!(scaled_width(100.0, 30), 30);
        assert_eq!(scaled_width(250.0, 30), 30);
        assert_eq!(scaled_width(f64::NAN, 30), 0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Base", 20), "Base");
        assert_eq!(truncate("a-very-long-chain-identifier", 10), "a-very-...");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_card_color_mapping() {
        assert_eq!(card_color("green"), Color::Green);
        assert_eq!(
            card_color("#ef4444"),
            Color::TrueColor {
                r: 239,
                g: 68,
                b: 68
            }
        );
        assert_eq!(card_color("unknown"), Color::White);
    }
}
