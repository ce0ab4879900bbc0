//! HTTP client for the blob statistics backend.

use super::types::{ChainProfile, ChainsPayload, StatsSnapshot};
use crate::utils::config::{CHAINS_ENDPOINT, DEFAULT_API_TIMEOUT, STATS_ENDPOINT};
use crate::utils::error::{ApiError, ParseError};
use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// API client for fetching pre-computed blob statistics
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(DEFAULT_API_TIMEOUT)
            .build()
            .map_err(ApiError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&base_url.into()),
        })
    }

    /// Fetch the aggregate statistics snapshot
    pub fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        let body = self.get(STATS_ENDPOINT)?;
        parse_snapshot(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Fetch per-chain blob totals
    pub fn fetch_chains(&self) -> Result<Vec<ChainProfile>, ApiError> {
        let body = self.get(CHAINS_ENDPOINT)?;
        parse_chains(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    fn get(&self, endpoint: &str) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        info!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(ApiError::RequestFailed)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url));
        }

        if !status.is_success() {
            return Err(ApiError::InvalidResponse(format!(
                "HTTP {}: {}",
                status,
                response.text().unwrap_or_default()
            )));
        }

        let body = response.text().map_err(ApiError::RequestFailed)?;
        debug!("Received {} bytes from {}", body.len(), url);

        Ok(body)
    }
}

/// Decode a statistics snapshot from JSON
pub fn parse_snapshot(json: &str) -> Result<StatsSnapshot, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    if !value.is_object() {
        return Err(ParseError::InvalidFormat(
            "stats payload must be a JSON object".to_string(),
        ));
    }

    let snapshot: StatsSnapshot = serde_json::from_value(value)?;
    if snapshot.avg_blobs_per_block < 0.0 || snapshot.latest_gas_price < 0.0 {
        warn!("Snapshot contains negative values: {:?}", snapshot);
    }

    Ok(snapshot)
}

/// Decode per-chain totals from JSON (bare array or `{ "chains": [...] }`)
pub fn parse_chains(json: &str) -> Result<Vec<ChainProfile>, ParseError> {
    let payload: ChainsPayload = serde_json::from_str(json)?;
    let profiles = payload.into_profiles();

    debug!("Decoded {} chain profiles", profiles.len());
    Ok(profiles)
}

/// Strip trailing slashes so endpoints join cleanly
fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://localhost:3000/"), "http://localhost:3000");
        assert_eq!(normalize_base_url("http://localhost:3000"), "http://localhost:3000");
    }

    #[test]
    fn test_parse_snapshot_missing_fields() {
        let snapshot = parse_snapshot(r#"{"total_blobs": 42}"#).unwrap();
        assert_eq!(snapshot.total_blobs, 42);
        assert_eq!(snapshot.avg_blobs_per_block, 0.0);
        assert_eq!(snapshot.latest_gas_price, 0.0);
    }

    #[test]
    fn test_parse_snapshot_rejects_array() {
        assert!(matches!(
            parse_snapshot("[]"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_chains_both_shapes() {
        let bare = parse_chains(r#"[{"chain": "base", "total_blobs": 10}]"#).unwrap();
        let wrapped =
            parse_chains(r#"{"chains": [{"chain": "base", "total_blobs": 10}]}"#).unwrap();

        assert_eq!(bare, wrapped);
        assert_eq!(bare[0], ChainProfile::new("base", 10));
    }

    #[test]
    fn test_parse_snapshot_null_fields() {
        let snapshot = parse_snapshot(
            r#"{"total_blobs": 1000, "avg_blobs_per_block": null, "latest_gas_price": null}"#,
        )
        .unwrap();

        assert_eq!(snapshot, StatsSnapshot::new(1000, 0.0, 0.0));
    }

    #[test]
    fn test_parse_snapshot_numeric_strings() {
        let snapshot = parse_snapshot(
            r#"{"total_blobs": "12", "avg_blobs_per_block": 3.5, "latest_gas_price": "1000000000"}"#,
        )
        .unwrap();

        assert_eq!(snapshot.total_blobs, 12);
        assert_eq!(snapshot.latest_gas_price, 1e9);
    }

    #[test]
    fn test_parse_snapshot_float_count() {
        let snapshot = parse_snapshot(r#"{"total_blobs": 1000.0}"#).unwrap();
        assert_eq!(snapshot.total_blobs, 1000);
    }

    #[test]
    fn test_parse_snapshot_garbage_string_fails() {
        assert!(parse_snapshot(r#"{"latest_gas_price": "cheap"}"#).is_err());
    }

    #[test]
    fn test_parse_chains_negative_count_clamps() {
        let profiles = parse_chains(
            r#"[{"chain": "base", "total_blobs": 10}, {"chain": "bad", "total_blobs": -1}, {"chain": null, "total_blobs": null}]"#,
        )
        .unwrap();

        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[1], ChainProfile::new("bad", 0));
        assert_eq!(profiles[2], ChainProfile::new("", 0));
    }
}
