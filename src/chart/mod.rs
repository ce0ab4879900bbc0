//! Chart rendering for the chain distribution.
//!
//! This module converts a view into an SVG pie chart and a colored
//! terminal summary.

pub mod generator;

// Re-export main types
pub use generator::{generate_pie_chart, generate_text_summary, ChartConfig};
