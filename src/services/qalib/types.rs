use serde::{Deserialize, Serialize};

/// Cached feature store (QA library) record, keyed by `featureStoreId`.
///
/// Written by the provisioning side after a successful login; this service
/// only reads it. Unknown fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QalibInfo {
    #[serde(rename = "featureStoreId", alias = "id", default)]
    pub feature_store_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    // Password hash of the library; must never reach a client.
    #[serde(default, skip_serializing)]
    pub hashpass: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub raw_files: Vec<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl QalibInfo {
    pub fn new(feature_store_id: impl Into<String>) -> Self {
        Self {
            feature_store_id: feature_store_id.into(),
            ..Self::default()
        }
    }
}
