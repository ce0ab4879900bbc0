//! Rank per-chain blob totals into a colored proportional distribution.

use super::ramp::ramp_color;
use crate::api::ChainProfile;
use log::debug;
use serde::{Deserialize, Serialize};

/// One slice of the chain distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainShare {
    /// Chain identifier (display key)
    pub chain: String,

    /// Blobs posted by this chain
    pub count: u64,

    /// Share of the grand total, 0-100
    pub percentage: f64,

    /// Ramp color as `#rrggbb`
    pub color: String,
}

/// Ranked distribution, largest share first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainDistribution {
    pub entries: Vec<ChainShare>,

    /// Sum of all counts
    pub total: u64,
}

impl ChainDistribution {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Share held by the largest chain, if any
    pub fn leader(&self) -> Option<&ChainShare> {
        self.entries.first()
    }
}

/// Aggregate chain profiles into a ranked, colored distribution
///
/// # Algorithm
/// 1. Sum every profile into the grand total
/// 2. Drop profiles with no blobs
/// 3. Stable sort by count (descending), so ties keep input order
/// 4. Compute each share of the grand total
/// 5. Color by rank along the ramp
pub fn aggregate(profiles: &[ChainProfile]) -> ChainDistribution {
    let grand_total = profiles
        .iter()
        .fold(0u64, |acc, p| acc.saturating_add(p.total_blobs));

    let mut included: Vec<&ChainProfile> =
        profiles.iter().filter(|p| p.total_blobs > 0).collect();

    // sort_by is stable
    included.sort_by(|a, b| b.total_blobs.cmp(&a.total_blobs));

    let count = included.len();
    let entries: Vec<ChainShare> = included
        .into_iter()
        .enumerate()
        .map(|(rank, profile)| ChainShare {
            chain: profile.chain.clone(),
            count: profile.total_blobs,
            percentage: share_pct(profile.total_blobs, grand_total),
            color: ramp_color(rank, count).to_hex(),
        })
        .collect();

    debug!(
        "Aggregated {} of {} chains, {} blobs total",
        entries.len(),
        profiles.len(),
        grand_total
    );

    ChainDistribution {
        entries,
        total: grand_total,
    }
}

fn share_pct(count: u64, grand_total: u64) -> f64 {
    if grand_total > 0 {
        (count as f64 / grand_total as f64) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::ramp::RAMP_STOPS;

    #[test]
    fn test_aggregate_ranks_descending() {
        let profiles = vec![
            ChainProfile::new("scroll", 100),
            ChainProfile::new("base", 500),
            ChainProfile::new("arbitrum", 400),
        ];

        let dist = aggregate(&profiles);

        assert_eq!(dist.total, 1000);
        let chains: Vec<&str> = dist.entries.iter().map(|e| e.chain.as_str()).collect();
        assert_eq!(chains, vec!["base", "arbitrum", "scroll"]);
        assert_eq!(dist.entries[0].percentage, 50.0);
        assert_eq!(dist.entries[0].color, RAMP_STOPS[0].to_hex());
        assert_eq!(dist.entries[2].color, RAMP_STOPS[4].to_hex());
    }

    #[test]
    fn test_aggregate_excludes_empty_chains() {
        let profiles = vec![ChainProfile::new("idle", 0), ChainProfile::new("base", 3)];

        let dist = aggregate(&profiles);

        assert_eq!(dist.len(), 1);
        assert_eq!(dist.entries[0].percentage, 100.0);
        assert_eq!(dist.entries[0].color, RAMP_STOPS[0].to_hex());
    }

    #[test]
    fn test_aggregate_empty_input() {
        let dist = aggregate(&[]);
        assert!(dist.is_empty());
        assert_eq!(dist.total, 0);
        assert!(dist.leader().is_none());
    }

    #[test]
    fn test_share_pct_zero_total() {
        assert_eq!(share_pct(0, 0), 0.0);
    }
}
