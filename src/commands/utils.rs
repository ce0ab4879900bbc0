use crate::output::read_view;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a view JSON file
pub fn validate_view_file(file_path: PathBuf) -> Result<()> {
    println!("Validating view: {}", file_path.display());

    let document = read_view(&file_path)?;
    let view = &document.view;

    if document.version != SCHEMA_VERSION {
        log::warn!(
            "Schema version {} differs from current {}",
            document.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid view JSON");
    println!("  Version: {}", document.version);
    println!("  Source: {}", document.source);
    println!("  Generated: {}", document.generated_at);
    println!("  Total Blobs: {}", view.metrics.total_blobs_display);
    println!(
        "  Utilization: {:.1}% | Saturation: {:.1}%",
        view.metrics.target_utilization_pct, view.metrics.saturation_pct
    );
    println!("  Regime: {}", view.metrics.regime.label);
    println!("  Chains: {}", view.distribution.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Blob Stats Studio View Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  source: string             - API URL or input file(s)");
        println!("  protocol: object           - blob_target, blob_max, blob_size_bytes");
        println!("  generated_at: string       - ISO 8601 timestamp");
        println!("  view: object");
        println!("    metrics: object          - Derived ratios, levels, regime, display strings");
        println!("    cards: array             - Dashboard cards in display order");
        println!("      title, value: string");
        println!("      subtitle?, info?: string");
        println!("      color: string          - Accent name or #rrggbb");
        println!("      bar?: object           - value, max, fill_pct, marker_pct?");
        println!("    distribution: object");
        println!("      total: number          - Sum of all chain blobs");
        println!("      entries: array         - chain, count, percentage, color (largest first)");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Blob Stats Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("View Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Blob utilization, gas price and chain distribution views for Ethereum blobs.");
}
