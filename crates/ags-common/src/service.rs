//! Map service descriptors (`GET <serviceUrl>?f=json`).

use serde::{Deserialize, Serialize};

/// Top-level descriptor of an ArcGIS map or feature service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    #[serde(default)]
    pub map_name: Option<String>,

    #[serde(default)]
    pub current_version: Option<serde_json::Number>,

    /// Layers in service order
    #[serde(default)]
    pub layers: Vec<LayerSummary>,
}

/// One entry of the service's layer list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSummary {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub parent_layer_id: Option<i64>,

    #[serde(default)]
    pub sub_layer_ids: Option<Vec<i64>>,
}

impl ServiceDescriptor {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
