use std::path::Path;
use blob_stats_studio::output::{read_view, validate_path, write_svg, write_view};
use blob_stats_studio::utils::error::OutputError;
use blob_stats_studio::view::{to_document, ViewDocument};
use blob_stats_studio::{build_view, ChainProfile, ProtocolParams, StatsSnapshot};
use tempfile::NamedTempFile;

fn create_test_document() -> ViewDocument {
    let params = ProtocolParams::pectra();
    let view = build_view(
        &StatsSnapshot::new(2_048, 7.5, 3e9),
        &[ChainProfile::new("base", 2_000), ChainProfile::new("zora", 48)],
        &params,
    );
    to_document(view, "http://localhost:3000", params)
}

#[test]
fn test_write_and_read_view() {
    let document = create_test_document();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Write
    write_view(&document, path).unwrap();

    // Read back
    let loaded = read_view(path).unwrap();

    assert_eq!(loaded.version, document.version);
    assert_eq!(loaded.source, document.source);
    assert_eq!(loaded.protocol, ProtocolParams::pectra());
    assert_eq!(loaded.view.metrics.gas_price_display, "3.00 Gwei");
    assert_eq!(loaded.view.distribution.total, 2_048);
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_write_view_to_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(write_view(&create_test_document(), temp_dir.path()).is_err());
}

#[test]
fn test_read_view_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = read_view(temp_dir.path().join("missing.json"));

    assert!(matches!(result, Err(OutputError::ReadFailed(_))));
}

#[test]
fn test_write_svg_nested() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("charts/chains.svg");

    write_svg("<svg></svg>", &path).unwrap();

    assert_eq!(std::fs::read_to_string(path).unwrap(), "<svg></svg>");
}
