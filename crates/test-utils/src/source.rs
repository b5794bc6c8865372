//! In-memory `DescriptorSource` serving fixture JSON.

use std::collections::HashMap;

use serde_json::{json, Value};

use ags_common::source::feature_count;
use ags_common::{AgsError, AgsResult, DescriptorSource, LayerDescriptor, ServiceDescriptor};

/// A service held entirely in memory.
///
/// Layers and query pages are registered by id. Query pages are served by
/// result offset: the page returned for `offset` is the one preceded by
/// exactly `offset` features.
#[derive(Debug, Default)]
pub struct MemorySource {
    service: String,
    layers: HashMap<i64, String>,
    pages: HashMap<i64, Vec<Value>>,
}

impl MemorySource {
    pub fn new(service_json: &str) -> Self {
        Self {
            service: service_json.to_string(),
            ..Self::default()
        }
    }

    /// Serve `layer_json` for `GET <serviceUrl>/<layer_id>`.
    pub fn with_layer(mut self, layer_id: i64, layer_json: &str) -> Self {
        self.layers.insert(layer_id, layer_json.to_string());
        self
    }

    /// Append a query page for `layer_id`.
    pub fn with_page(mut self, layer_id: i64, page_json: &str) -> Self {
        let page = serde_json::from_str(page_json).unwrap_or_else(|_| json!({"features": []}));
        self.pages.entry(layer_id).or_default().push(page);
        self
    }
}

impl DescriptorSource for MemorySource {
    fn service(&self) -> AgsResult<ServiceDescriptor> {
        Ok(ServiceDescriptor::from_json(&self.service)?)
    }

    fn layer(&self, layer_id: i64) -> AgsResult<LayerDescriptor> {
        let json = self.layers.get(&layer_id).ok_or_else(|| missing_layer(layer_id))?;
        Ok(LayerDescriptor::from_json(json)?)
    }

    fn query_page(&self, layer_id: i64, offset: usize) -> AgsResult<Value> {
        let pages = self.pages.get(&layer_id).ok_or_else(|| missing_layer(layer_id))?;

        let mut seen = 0;
        for page in pages {
            if seen == offset {
                return Ok(page.clone());
            }
            seen += feature_count(page);
        }
        Ok(json!({"features": []}))
    }
}

fn missing_layer(layer_id: i64) -> AgsError {
    AgsError::Service {
        code: 400,
        message: format!("Invalid or missing layer {}", layer_id),
    }
}
