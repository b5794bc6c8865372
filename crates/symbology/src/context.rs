//! Parsed per-layer state shared by every converter.

use std::path::{Path, PathBuf};

use ags_common::naming::slugify;
use ags_common::{GeometryType, LayerDescriptor, ScaleBounds};

use crate::IconFormat;

/// Everything converters need to know about the layer being styled.
///
/// Built once from the fetched descriptor and passed by reference through
/// dispatch and conversion.
#[derive(Debug, Clone)]
pub struct LayerContext {
    /// Slug used for the SLD file, the NamedLayer and the icon folder
    pub name: String,
    pub descriptor: LayerDescriptor,
    pub scale_bounds: ScaleBounds,
    /// Folder holding `<name>.sld`
    pub styles_dir: PathBuf,
    pub icon_format: IconFormat,
}

impl LayerContext {
    pub fn new(descriptor: LayerDescriptor, styles_dir: impl AsRef<Path>, icon_format: IconFormat) -> Self {
        let mut name = slugify(&descriptor.name);
        if name.is_empty() {
            name = format!("layer-{}", descriptor.id.unwrap_or_default());
        }
        Self {
            scale_bounds: descriptor.scale_bounds(),
            name,
            descriptor,
            styles_dir: styles_dir.as_ref().to_path_buf(),
            icon_format,
        }
    }

    pub fn geometry_type(&self) -> Option<GeometryType> {
        self.descriptor.geometry_type
    }

    /// Folder for this layer's icons.
    pub fn icon_dir(&self) -> PathBuf {
        self.styles_dir.join(&self.name)
    }

    /// Path of the SLD document for this layer.
    pub fn sld_path(&self) -> PathBuf {
        self.styles_dir.join(format!("{}.sld", self.name))
    }
}
