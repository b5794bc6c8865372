//! Blocking HTTP client for the ArcGIS REST API.

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use ags_common::{AgsError, AgsResult, DescriptorSource, LayerDescriptor, ServiceDescriptor};

/// Talks to one map service endpoint.
pub struct ArcGisClient {
    client: Client,
    service_url: String,
}

impl ArcGisClient {
    pub fn new(service_url: &str) -> AgsResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("agsdump/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AgsError::http(service_url, e))?;

        Ok(Self {
            client,
            service_url: service_url.trim_end_matches('/').to_string(),
        })
    }

    fn layer_url(&self, layer_id: i64) -> String {
        format!("{}/{}", self.service_url, layer_id)
    }

    fn get_json(&self, url: &str, query: &[(&str, String)]) -> AgsResult<Value> {
        debug!(url = %url, "GET");
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| AgsError::http(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgsError::http(url, format!("HTTP {}", status)));
        }

        let body = response.text().map_err(|e| AgsError::http(url, e))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// A descriptor request: errors reported in the body fail the request.
    fn get_descriptor(&self, url: &str) -> AgsResult<Value> {
        let value = self.get_json(url, &[("f", "json".to_string())])?;
        check_service_error(&value)?;
        Ok(value)
    }
}

impl DescriptorSource for ArcGisClient {
    fn service(&self) -> AgsResult<ServiceDescriptor> {
        let value = self.get_descriptor(&self.service_url)?;
        Ok(serde_json::from_value(value)?)
    }

    fn layer(&self, layer_id: i64) -> AgsResult<LayerDescriptor> {
        let value = self.get_descriptor(&self.layer_url(layer_id))?;
        Ok(serde_json::from_value(value)?)
    }

    fn query_page(&self, layer_id: i64, offset: usize) -> AgsResult<Value> {
        let url = format!("{}/query", self.layer_url(layer_id));
        self.get_json(&url, &query_params(offset))
    }
}

/// Parameters selecting every feature with all attributes and geometry.
fn query_params(offset: usize) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("where", "1=1".to_string()),
        ("outFields", "*".to_string()),
        ("returnGeometry", "true".to_string()),
        ("f", "json".to_string()),
    ];
    if offset > 0 {
        params.push(("resultOffset", offset.to_string()));
    }
    params
}

/// Turn an ArcGIS `{"error": {"code": ..., "message": ...}}` body into an error.
pub fn check_service_error(value: &Value) -> AgsResult<()> {
    match value.get("error") {
        Some(error) => Err(AgsError::Service {
            code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
        }),
        None => Ok(()),
    }
}
