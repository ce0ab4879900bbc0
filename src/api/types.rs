//! Payload types served by the statistics backend.
//!
//! Every numeric field defaults to zero so partially populated payloads
//! never fail to decode. `null` counts as absent, numeric strings are
//! accepted, and negative counts clamp to zero.

use serde::{Deserialize, Serialize};

/// Aggregate blob statistics snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Total blobs observed
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_blobs: u64,

    /// Average blobs per block
    #[serde(default, deserialize_with = "lenient::real")]
    pub avg_blobs_per_block: f64,

    /// Latest blob base fee, in wei
    #[serde(default, deserialize_with = "lenient::real")]
    pub latest_gas_price: f64,
}

impl StatsSnapshot {
    pub fn new(total_blobs: u64, avg_blobs_per_block: f64, latest_gas_price: f64) -> Self {
        Self {
            total_blobs,
            avg_blobs_per_block,
            latest_gas_price,
        }
    }
}

/// Blob totals for a single chain (rollup)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainProfile {
    /// Chain identifier, also used as the display key
    #[serde(default, deserialize_with = "lenient::text")]
    pub chain: String,

    /// Total blobs posted by this chain
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_blobs: u64,
}

impl ChainProfile {
    pub fn new(chain: impl Into<String>, total_blobs: u64) -> Self {
        Self {
            chain: chain.into(),
            total_blobs,
        }
    }
}

/// Accepted shapes of the chains endpoint
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ChainsPayload {
    List(Vec<ChainProfile>),
    Wrapped { chains: Vec<ChainProfile> },
}

impl ChainsPayload {
    pub(crate) fn into_profiles(self) -> Vec<ChainProfile> {
        match self {
            ChainsPayload::List(chains) | ChainsPayload::Wrapped { chains } => chains,
        }
    }
}

/// Field decoders that tolerate the loose numbers the backend emits
mod lenient {
    use serde::de::{Deserialize, Deserializer, Error};
    use serde_json::Value;

    /// Non-negative integer count; `null` and negatives become 0
    pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => return Ok(0),
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_u64() {
                    return Ok(v);
                }
                n.as_f64().unwrap_or(0.0)
            }
            Some(Value::String(s)) => parse_number(&s).map_err(D::Error::custom)?,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "invalid type: {}, expected a blob count",
                    other
                )))
            }
        };

        if value.is_finite() && value > 0.0 {
            Ok(value.trunc() as u64)
        } else {
            Ok(0)
        }
    }

    /// Real-valued field; `null` becomes 0.0
    pub fn real<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(0.0),
            Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or(0.0)),
            Some(Value::String(s)) => parse_number(&s).map_err(D::Error::custom),
            Some(other) => Err(D::Error::custom(format!(
                "invalid type: {}, expected a number",
                other
            ))),
        }
    }

    /// String field; `null` becomes empty
    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }

    fn parse_number(raw: &str) -> Result<f64, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }
        trimmed
            .parse::<f64>()
            .map_err(|_| format!("invalid number string: {:?}", raw))
    }
}
