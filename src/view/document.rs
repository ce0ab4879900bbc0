//! Versioned JSON document wrapping a view for output.
//!
//! The timestamp lives here, outside `StatView`, so the view itself stays
//! identical across repeated renders of the same input.

use super::model::StatView;
use crate::utils::config::{ProtocolParams, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

/// Top-level document written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the statistics came from (API URL or file path)
    pub source: String,

    /// Protocol parameters used for derivation
    pub protocol: ProtocolParams,

    /// Timestamp when the document was generated
    pub generated_at: String,

    pub view: StatView,
}

/// Wrap a view into an output document
pub fn to_document(view: StatView, source: impl Into<String>, protocol: ProtocolParams) -> ViewDocument {
    use chrono::Utc;

    ViewDocument {
        version: SCHEMA_VERSION.to_string(),
        source: source.into(),
        protocol,
        generated_at: Utc::now().to_rfc3339(),
        view,
    }
}
