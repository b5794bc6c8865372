//! Per-layer orchestration: descriptor in, `.sld` file out.

use std::fs;
use std::path::{Path, PathBuf};

use sld::StyledLayerDescriptor;
use tracing::{debug, info, warn};

use ags_common::{AgsError, AgsResult, DescriptorSource};

use crate::labels::add_label_rules;
use crate::{dispatch, IconFormat, LayerContext};

/// What happened to one layer's style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerStyleOutcome {
    /// SLD document written to this path
    Written(PathBuf),
    /// Not a Feature Layer, nothing to style
    Skipped { layer_type: String },
}

/// Build the SLD document for a parsed layer.
///
/// Writes picture marker icons as a side effect.
pub fn build_document(ctx: &LayerContext) -> AgsResult<StyledLayerDescriptor> {
    let mut doc = StyledLayerDescriptor::new();
    let fts = doc.create_named_layer(ctx.name.as_str()).feature_type_style_mut();

    dispatch(ctx, fts)?;
    add_label_rules(fts, ctx.descriptor.labeling_info());

    debug!(layer = %ctx.name, rules = fts.rules.len(), "Built SLD document");
    Ok(doc)
}

/// Fetch one layer, translate its symbology and write `<styles_dir>/<name>.sld`.
pub fn dump_layer_style(
    source: &dyn DescriptorSource,
    layer_id: i64,
    styles_dir: &Path,
    icon_format: IconFormat,
) -> AgsResult<LayerStyleOutcome> {
    let descriptor = source.layer(layer_id)?;

    if !descriptor.is_feature_layer() {
        let layer_type = descriptor.layer_type.unwrap_or_default();
        warn!(layer_id, layer_type = %layer_type, "Not a Feature Layer, style not parsed");
        return Ok(LayerStyleOutcome::Skipped { layer_type });
    }

    let ctx = LayerContext::new(descriptor, styles_dir, icon_format);
    let doc = build_document(&ctx)?;
    let xml = doc.to_xml().map_err(|e| AgsError::Sld(e.to_string()))?;

    fs::create_dir_all(styles_dir)?;
    let path = ctx.sld_path();
    fs::write(&path, xml)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!(layer_id, sld = %file_name, "Wrote style");
    Ok(LayerStyleOutcome::Written(path))
}
