//! Access to a service's descriptors and feature data.

use serde_json::Value;
use tracing::warn;

use crate::{AgsResult, LayerDescriptor, ServiceDescriptor};

/// Something that can answer the ArcGIS REST requests agsdump needs.
///
/// The HTTP client in the `agsdump` binary is the production implementation;
/// tests use an in-memory one.
pub trait DescriptorSource {
    /// `GET <serviceUrl>?f=json`
    fn service(&self) -> AgsResult<ServiceDescriptor>;

    /// `GET <serviceUrl>/<layerId>?f=json`
    fn layer(&self, layer_id: i64) -> AgsResult<LayerDescriptor>;

    /// One page of `GET <serviceUrl>/<layerId>/query`, starting at `offset`.
    fn query_page(&self, layer_id: i64, offset: usize) -> AgsResult<Value>;

    /// All features of a layer as one ArcGIS feature set.
    ///
    /// Follows `exceededTransferLimit` by requesting further pages with a
    /// result offset and appending their features to the first response.
    fn features(&self, layer_id: i64) -> AgsResult<Value> {
        let mut collection = self.query_page(layer_id, 0)?;
        let mut exceeded = exceeded_transfer_limit(&collection);

        while exceeded {
            let offset = feature_count(&collection);
            let page = self.query_page(layer_id, offset)?;
            exceeded = exceeded_transfer_limit(&page);

            let features = match page.get("features").and_then(Value::as_array) {
                Some(features) if !features.is_empty() => features.clone(),
                _ => break,
            };
            // Servers without pagination ignore resultOffset and resend the first page.
            if features.first() == first_feature(&collection) {
                warn!(layer_id, offset, "Query ignored resultOffset, keeping first page only");
                break;
            }
            if let Some(Value::Array(all)) = collection.get_mut("features") {
                all.extend(features);
            } else {
                break;
            }
        }

        if let Some(object) = collection.as_object_mut() {
            object.remove("exceededTransferLimit");
        }
        Ok(collection)
    }
}

/// Number of features in a feature set (0 when it has none).
pub fn feature_count(collection: &Value) -> usize {
    collection
        .get("features")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

fn first_feature(collection: &Value) -> Option<&Value> {
    collection
        .get("features")
        .and_then(Value::as_array)
        .and_then(|features| features.first())
}

fn exceeded_transfer_limit(page: &Value) -> bool {
    page.get("exceededTransferLimit")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
