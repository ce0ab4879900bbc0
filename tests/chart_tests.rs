use blob_stats_studio::chart::{generate_pie_chart, generate_text_summary, ChartConfig};
use blob_stats_studio::utils::error::ChartError;
use blob_stats_studio::{aggregate, build_view, ChainProfile, ProtocolParams, StatsSnapshot};

fn profiles() -> Vec<ChainProfile> {
    vec![
        ChainProfile::new("base", 600),
        ChainProfile::new("arbitrum", 300),
        ChainProfile::new("scroll", 100),
    ]
}

#[test]
fn test_pie_chart_has_slice_per_chain() {
    let dist = aggregate(&profiles());
    let svg = generate_pie_chart(&dist, None).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches(r#"class="slice""#).count(), 3);
    assert!(svg.contains("Blobs by Chain"));
    assert!(svg.contains("Arbitrum One - 300 (30.0%)"));
    for entry in &dist.entries {
        assert!(svg.contains(&entry.color));
    }
}

#[test]
fn test_pie_chart_large_slice_uses_large_arc() {
    let dist = aggregate(&profiles());
    let svg = generate_pie_chart(&dist, None).unwrap();

    // base holds 60% of the pie, so its arc needs the large-arc flag
    assert!(svg.contains(" 0 1 1 "));
}

#[test]
fn test_single_chain_is_full_circle() {
    let dist = aggregate(&[ChainProfile::new("base", 10)]);
    let svg = generate_pie_chart(&dist, None).unwrap();

    assert!(!svg.contains("<path"));
    assert_eq!(svg.matches(r#"class="slice""#).count(), 1);
}

#[test]
fn test_empty_distribution_is_an_error() {
    let dist = aggregate(&[]);
    assert!(matches!(
        generate_pie_chart(&dist, None),
        Err(ChartError::EmptyDistribution)
    ));
}

#[test]
fn test_chart_config_title_is_escaped() {
    let dist = aggregate(&profiles());
    let config = ChartConfig::new()
        .with_title("Blobs <24h> & more")
        .with_width(800);

    let svg = generate_pie_chart(&dist, Some(&config)).unwrap();

    assert!(svg.contains("Blobs &lt;24h&gt; &amp; more"));
    assert!(svg.contains(r#"width="800""#));
}

#[test]
fn test_text_summary_lists_cards_and_chains() {
    let view = build_view(
        &StatsSnapshot::new(1000, 4.0, 1e9),
        &profiles(),
        &ProtocolParams::default(),
    );

    let summary = generate_text_summary(&view, 2);

    assert!(summary.contains("Target Utilization"));
    assert!(summary.contains("1.00 Gwei"));
    assert!(summary.contains("Base"));
    assert!(summary.contains("Arbitrum One"));
    assert!(!summary.contains("Scroll"));
    assert!(summary.contains("Showing top 2 of 3 chains"));
}

#[test]
fn test_text_summary_without_chains() {
    let view = build_view(&StatsSnapshot::default(), &[], &ProtocolParams::default());

    let summary = generate_text_summary(&view, 10);

    assert!(summary.contains("no chain data"));
}
