//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod render;
pub mod utils;

// Re-export main command functions
pub use models::{RenderArgs, StatsSource};
pub use render::{execute_render, validate_args};
pub use utils::{display_schema, display_version, validate_view_file};
