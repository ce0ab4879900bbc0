//! SVG chart output writer.

use super::{ensure_parent_dir, validate_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write SVG content to a file
///
/// # Example
/// ```ignore
/// let svg = generate_pie_chart(&view.distribution, None)?;
/// write_svg(&svg, "chains.svg")?;
/// ```
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing SVG to: {}", output_path.display());

    validate_path(output_path)?;
    if output_path.extension().map_or(true, |ext| ext != "svg") {
        debug!("File does not have .svg extension: {}", output_path.display());
    }

    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(svg_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    let file_size = svg_content.len();
    info!(
        "SVG written successfully ({} bytes, {:.2} KB)",
        file_size,
        file_size as f64 / 1024.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const VALID_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <circle cx="50" cy="50" r="40" fill="#1e3a8a"/>
</svg>"##;

    #[test]
    fn test_write_svg() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_svg(VALID_SVG, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, VALID_SVG);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/chains.svg");

        write_svg(VALID_SVG, &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_write_svg_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(write_svg(VALID_SVG, temp_dir.path()).is_err());
    }
}
