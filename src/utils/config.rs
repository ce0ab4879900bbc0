//! Configuration and constants for the CLI.
//!
//! Protocol constants are fixed configuration, not runtime input. They can
//! be overridden as a whole from a TOML file when a network upgrade changes
//! the blob target or capacity.

use super::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default timeout for API requests
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// Default statistics backend
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

pub const STATS_ENDPOINT: &str = "/api/stats";
pub const CHAINS_ENDPOINT: &str = "/api/chains";

/// Current view document schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Blob protocol constants (EIP-4844 launch values)
pub const BLOB_TARGET: f64 = 3.0;
pub const BLOB_MAX: f64 = 6.0;
pub const BLOB_SIZE_BYTES: u64 = 131_072; // 4096 field elements * 32 bytes

/// 1 Gwei = 10^9 wei
pub const WEI_PER_GWEI: f64 = 1e9;

// Bar scales used by the stat cards
pub const UTILIZATION_BAR_MAX: f64 = 200.0;
pub const UTILIZATION_BAR_MARKER: f64 = 100.0;
pub const SATURATION_BAR_MAX: f64 = 100.0;

/// Blob protocol parameters used by the metric deriver
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ProtocolParams {
    /// Target blobs per block
    #[serde(default = "default_target")]
    pub blob_target: f64,

    /// Maximum blobs per block
    #[serde(default = "default_max")]
    pub blob_max: f64,

    /// Bytes carried by a single blob
    #[serde(default = "default_blob_size")]
    pub blob_size_bytes: u64,
}

fn default_target() -> f64 {
    BLOB_TARGET
}

fn default_max() -> f64 {
    BLOB_MAX
}

fn default_blob_size() -> u64 {
    BLOB_SIZE_BYTES
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            blob_target: BLOB_TARGET,
            blob_max: BLOB_MAX,
            blob_size_bytes: BLOB_SIZE_BYTES,
        }
    }
}

impl ProtocolParams {
    /// Parameters after the Pectra upgrade (EIP-7691)
    pub fn pectra() -> Self {
        Self {
            blob_target: 6.0,
            blob_max: 9.0,
            blob_size_bytes: BLOB_SIZE_BYTES,
        }
    }

    /// Check that the parameters keep every ratio well-defined
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.blob_target.is_finite() || self.blob_target <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "blob_target must be positive, got {}",
                self.blob_target
            )));
        }

        if !self.blob_max.is_finite() || self.blob_max < self.blob_target {
            return Err(ConfigError::Invalid(format!(
                "blob_max ({}) must be at least blob_target ({})",
                self.blob_max, self.blob_target
            )));
        }

        if self.blob_size_bytes == 0 {
            return Err(ConfigError::Invalid(
                "blob_size_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load protocol parameters from a TOML file
///
/// Missing keys fall back to the built-in constants.
///
/// # Example
/// ```ignore
/// let params = load_protocol("protocol.toml")?;
/// ```
pub fn load_protocol(path: impl AsRef<Path>) -> Result<ProtocolParams, ConfigError> {
    let path = path.as_ref();
    debug!("Loading protocol parameters from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let params: ProtocolParams = toml::from_str(&contents)?;
    params.validate()?;

    Ok(params)
}
