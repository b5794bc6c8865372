//! The dump driver: every layer of the service, data pass then styles pass.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use ags_common::naming::underscored;
use ags_common::source::feature_count;
use ags_common::{DescriptorSource, ServiceDescriptor};
use symbology::{dump_layer_style, IconFormat, LayerStyleOutcome};

use crate::config::DumpConfig;

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DumpSummary {
    pub data_files: usize,
    pub styles_written: usize,
    pub styles_skipped: usize,
}

/// Run the passes selected in `config` against `source`.
pub fn run(config: &DumpConfig, source: &dyn DescriptorSource) -> Result<DumpSummary> {
    let service = source
        .service()
        .with_context(|| format!("Failed to read service {}", config.service_url))?;
    info!(
        map = %config.map_name,
        layers = service.layers.len(),
        "Read service descriptor"
    );

    let mut summary = DumpSummary::default();

    if config.dump_data {
        summary.data_files = dump_data(source, &service, &config.data_dir())?;
    }

    if config.dump_styles {
        let (written, skipped) = dump_styles(source, &service, &config.styles_dir(), config.icon_format)?;
        summary.styles_written = written;
        summary.styles_skipped = skipped;
    }

    Ok(summary)
}

/// Write every layer's features to `<data_dir>/<layer_name>.json`.
pub fn dump_data(source: &dyn DescriptorSource, service: &ServiceDescriptor, data_dir: &Path) -> Result<usize> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    for layer in &service.layers {
        let layer_name = underscored(&layer.name);
        info!(layer_id = layer.id, layer = %layer_name, "Dumping data");

        let started = Utc::now();
        let features = source
            .features(layer.id)
            .with_context(|| format!("Failed to query layer {}", layer.id))?;

        if let Some(error) = features.get("error") {
            warn!(layer_id = layer.id, error = %error, "Query returned an ArcGIS error");
        }

        let path = data_dir.join(format!("{}.json", layer_name));
        fs::write(&path, serde_json::to_vec(&features)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(
            layer_id = layer.id,
            features = feature_count(&features),
            started = %started.to_rfc3339(),
            finished = %Utc::now().to_rfc3339(),
            file = %path.display(),
            "Wrote data"
        );
    }

    Ok(service.layers.len())
}

/// Write every Feature Layer's SLD document; returns (written, skipped).
pub fn dump_styles(
    source: &dyn DescriptorSource,
    service: &ServiceDescriptor,
    styles_dir: &Path,
    icon_format: IconFormat,
) -> Result<(usize, usize)> {
    fs::create_dir_all(styles_dir)
        .with_context(|| format!("Failed to create {}", styles_dir.display()))?;

    let mut written = 0;
    let mut skipped = 0;

    for layer in &service.layers {
        info!(layer_id = layer.id, layer = %underscored(&layer.name), "Dumping style");

        let outcome = dump_layer_style(source, layer.id, styles_dir, icon_format)
            .with_context(|| format!("Failed to dump style of layer {}", layer.id))?;
        match outcome {
            LayerStyleOutcome::Written(_) => written += 1,
            LayerStyleOutcome::Skipped { .. } => skipped += 1,
        }
    }

    Ok((written, skipped))
}
