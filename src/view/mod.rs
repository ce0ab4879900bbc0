//! View model composition.
//!
//! Merges derived metrics and the chain distribution into the cards and
//! chart data consumed by renderers, plus the versioned output document.

pub mod document;
pub mod model;

pub use document::{to_document, ViewDocument};
pub use model::{build_view, StatBar, StatCard, StatView};
