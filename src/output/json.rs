//! JSON view document writer.
//!
//! Writes ViewDocument structs to JSON files with proper formatting.

use super::{ensure_parent_dir, validate_path};
use crate::utils::error::OutputError;
use crate::view::ViewDocument;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a view document to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let document = to_document(view, "http://localhost:3000", params);
/// write_view(&document, "view.json")?;
/// ```
pub fn write_view(document: &ViewDocument, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing view to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    // Serialize to JSON with pretty printing
    serde_json::to_writer_pretty(writer, document).map_err(OutputError::SerializationFailed)?;

    info!(
        "View written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a view document to a JSON string
pub fn view_to_string(document: &ViewDocument) -> Result<String, OutputError> {
    serde_json::to_string_pretty(document).map_err(OutputError::SerializationFailed)
}

/// Read a view document from a JSON file
///
/// # Errors
/// * `OutputError::ReadFailed` - File cannot be opened
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_view(input_path: impl AsRef<Path>) -> Result<ViewDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading view from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let document: ViewDocument =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "View loaded: version {}, source {}",
        document.version, document.source
    );

    Ok(document)
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
