use blob_stats_studio::api::parse_chains;
use blob_stats_studio::distribution::{aggregate, ramp_color, RAMP_STOPS};
use blob_stats_studio::ChainProfile;
use pretty_assertions::assert_eq;

fn sample_profiles() -> Vec<ChainProfile> {
    vec![
        ChainProfile::new("scroll", 120),
        ChainProfile::new("base", 4_200),
        ChainProfile::new("taiko", 0),
        ChainProfile::new("arbitrum", 2_900),
        ChainProfile::new("optimism", 1_300),
        ChainProfile::new("linea", 777),
        ChainProfile::new("zksync", 33),
    ]
}

#[test]
fn test_percentages_sum_to_one_hundred() {
    let dist = aggregate(&sample_profiles());

    let sum: f64 = dist.entries.iter().map(|e| e.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-6 * 100.0, "sum was {}", sum);
    assert_eq!(dist.total, 9_330);
}

#[test]
fn test_zero_chains_are_excluded() {
    let dist = aggregate(&sample_profiles());

    assert_eq!(dist.len(), 6);
    assert!(dist.entries.iter().all(|e| e.chain != "taiko"));
}

#[test]
fn test_all_zero_input_is_empty() {
    let dist = aggregate(&[ChainProfile::new("a", 0), ChainProfile::new("b", 0)]);

    assert!(dist.is_empty());
    assert_eq!(dist.total, 0);
}

#[test]
fn test_sorted_descending() {
    let dist = aggregate(&sample_profiles());

    let counts: Vec<u64> = dist.entries.iter().map(|e| e.count).collect();
    assert_eq!(counts, vec![4_200, 2_900, 1_300, 777, 120, 33]);
}

#[test]
fn test_ties_keep_input_order() {
    let profiles = vec![
        ChainProfile::new("first", 50),
        ChainProfile::new("big", 90),
        ChainProfile::new("second", 50),
        ChainProfile::new("third", 50),
    ];

    let dist = aggregate(&profiles);

    let chains: Vec<&str> = dist.entries.iter().map(|e| e.chain.as_str()).collect();
    assert_eq!(chains, vec!["big", "first", "second", "third"]);
}

#[test]
fn test_colors_are_deterministic_and_rank_based() {
    let first = aggregate(&sample_profiles());
    let second = aggregate(&sample_profiles());
    assert_eq!(first, second);

    let count = first.len();
    for (rank, entry) in first.entries.iter().enumerate() {
        assert_eq!(entry.color, ramp_color(rank, count).to_hex());
    }

    assert_eq!(first.entries[0].color, RAMP_STOPS[0].to_hex());
    assert_eq!(first.entries[count - 1].color, RAMP_STOPS[4].to_hex());
}

#[test]
fn test_color_follows_rank_not_identity() {
    let before = aggregate(&[ChainProfile::new("base", 10), ChainProfile::new("scroll", 5)]);
    let after = aggregate(&[ChainProfile::new("base", 10), ChainProfile::new("scroll", 50)]);

    let base_before = before.entries.iter().find(|e| e.chain == "base").unwrap();
    let base_after = after.entries.iter().find(|e| e.chain == "base").unwrap();
    assert_ne!(base_before.color, base_after.color);
}

#[test]
fn test_single_chain_gets_first_stop() {
    let dist = aggregate(&[ChainProfile::new("base", 1)]);

    assert_eq!(dist.entries[0].percentage, 100.0);
    assert_eq!(dist.entries[0].color, RAMP_STOPS[0].to_hex());
}

#[test]
fn test_negative_chain_row_is_dropped_not_fatal() {
    let profiles = parse_chains(
        r#"[{"chain": "base", "total_blobs": 10}, {"chain": "bad", "total_blobs": -1}]"#,
    )
    .unwrap();

    let dist = aggregate(&profiles);

    assert_eq!(dist.len(), 1);
    assert_eq!(dist.entries[0].chain, "base");
    assert_eq!(dist.entries[0].percentage, 100.0);
    assert_eq!(dist.total, 10);
}
