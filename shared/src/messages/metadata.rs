//! Metadata messages
//!
//! Bodies for `POST /api/rest/2.0/metadata/search` and
//! `POST /api/rest/2.0/metadata/liveboard/sql`.

use serde::{Deserialize, Serialize};

use crate::types::{LiveboardGuid, MetadataType};

/// Identifies a metadata object by name or GUID
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MetadataIdentifier {
    pub identifier: String,
    #[serde(rename = "type")]
    pub metadata_type: MetadataType,
}

impl MetadataIdentifier {
    pub fn liveboard(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            metadata_type: MetadataType::Liveboard,
        }
    }
}

/// Metadata search request
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SearchMetadataRequest {
    pub metadata: Vec<MetadataIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_size: Option<i64>,
}

impl SearchMetadataRequest {
    /// Search for liveboards matching a name
    pub fn liveboard_by_name(name: &str) -> Self {
        Self {
            metadata: vec![MetadataIdentifier::liveboard(name)],
            record_offset: None,
            record_size: None,
        }
    }
}

/// One row of a metadata search result
#[derive(Deserialize, Clone, Debug, Default)]
pub struct MetadataHeader {
    #[serde(default)]
    pub metadata_id: Option<String>,
    #[serde(default)]
    pub metadata_name: Option<String>,
    #[serde(default)]
    pub metadata_type: Option<String>,
}

/// Liveboard SQL request
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LiveboardSqlRequest {
    pub metadata_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization_identifiers: Option<Vec<String>>,
}

impl LiveboardSqlRequest {
    pub fn new(guid: &LiveboardGuid, visualizations: &[String]) -> Self {
        Self {
            metadata_identifier: guid.to_string(),
            visualization_identifiers: if visualizations.is_empty() {
                None
            } else {
                Some(visualizations.to_vec())
            },
        }
    }
}

/// SQL generated for a single visualization
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VisualizationQuery {
    pub metadata_id: String,
    #[serde(default)]
    pub metadata_name: Option<String>,
    pub sql_query: String,
}

/// Liveboard SQL response
#[derive(Deserialize, Clone, Debug, Default)]
pub struct LiveboardSqlResponse {
    #[serde(default)]
    pub metadata_id: Option<String>,
    #[serde(default)]
    pub metadata_name: Option<String>,
    #[serde(default)]
    pub sql_queries: Vec<VisualizationQuery>,
}
