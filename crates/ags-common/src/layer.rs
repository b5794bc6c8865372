//! Layer descriptors (`GET <serviceUrl>/<layerId>?f=json`).

use serde::Deserialize;
use serde_json::Number;

use crate::scale::{scale_bounds, ScaleBounds};
use crate::{Renderer, Symbol};

/// The only layer type that carries a drawable renderer.
pub const FEATURE_LAYER: &str = "Feature Layer";

/// Full descriptor of one service layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDescriptor {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: String,

    /// "Feature Layer", "Group Layer", "Raster Layer", ...
    #[serde(rename = "type", default)]
    pub layer_type: Option<String>,

    #[serde(default)]
    pub geometry_type: Option<GeometryType>,

    /// 0 means no limit
    #[serde(default)]
    pub min_scale: Option<Number>,

    /// 0 means no limit
    #[serde(default)]
    pub max_scale: Option<Number>,

    #[serde(default)]
    pub extent: Option<Extent>,

    #[serde(default)]
    pub drawing_info: Option<DrawingInfo>,
}

impl LayerDescriptor {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_feature_layer(&self) -> bool {
        self.layer_type.as_deref() == Some(FEATURE_LAYER)
    }

    /// SLD scale denominators for the whole layer.
    pub fn scale_bounds(&self) -> ScaleBounds {
        scale_bounds(self.min_scale.as_ref(), self.max_scale.as_ref())
    }

    pub fn renderer(&self) -> Option<&Renderer> {
        self.drawing_info.as_ref()?.renderer.as_ref()
    }

    pub fn labeling_info(&self) -> &[LabelingInfo] {
        self.drawing_info
            .as_ref()
            .and_then(|info| info.labeling_info.as_deref())
            .unwrap_or(&[])
    }

    /// Well-known ID of the layer extent's spatial reference.
    pub fn wkid(&self) -> Option<i64> {
        self.extent.as_ref()?.spatial_reference.as_ref()?.wkid
    }
}

/// Geometry type of a feature layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum GeometryType {
    #[serde(rename = "esriGeometryPoint")]
    Point,

    #[serde(rename = "esriGeometryPolyline")]
    Polyline,

    #[serde(rename = "esriGeometryPolygon")]
    Polygon,

    /// Multipoint, envelope, ...
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extent {
    #[serde(default)]
    pub spatial_reference: Option<SpatialReference>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialReference {
    #[serde(default)]
    pub wkid: Option<i64>,

    #[serde(default)]
    pub latest_wkid: Option<i64>,
}

/// Styling block of a feature layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingInfo {
    #[serde(default)]
    pub renderer: Option<Renderer>,

    #[serde(default)]
    pub labeling_info: Option<Vec<LabelingInfo>>,

    #[serde(default)]
    pub transparency: Option<Number>,
}

/// One labeling class.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelingInfo {
    /// e.g. `[NAME]`
    #[serde(default)]
    pub label_expression: Option<String>,

    /// e.g. `esriServerPointLabelPlacementAboveRight`
    #[serde(default)]
    pub label_placement: Option<String>,

    #[serde(default)]
    pub symbol: Option<Symbol>,

    #[serde(default)]
    pub min_scale: Option<Number>,

    #[serde(default)]
    pub max_scale: Option<Number>,
}

impl LabelingInfo {
    pub fn scale_bounds(&self) -> ScaleBounds {
        scale_bounds(self.min_scale.as_ref(), self.max_scale.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HYDRANTS: &str = r#"{
        "currentVersion": 10.61,
        "id": 0,
        "name": "Hydrants",
        "type": "Feature Layer",
        "geometryType": "esriGeometryPoint",
        "minScale": 0,
        "maxScale": 50000,
        "extent": {"xmin": 0, "ymin": 0, "xmax": 1, "ymax": 1, "spatialReference": {"wkid": 2100, "latestWkid": 2100}},
        "drawingInfo": {
            "renderer": {"type": "simple", "symbol": {"type": "esriSMS", "style": "esriSMSCircle", "color": [255,0,0,255], "size": 6}},
            "transparency": 0,
            "labelingInfo": null
        }
    }"#;

    #[test]
    fn test_parse_feature_layer() {
        let layer = LayerDescriptor::from_json(HYDRANTS).unwrap();
        assert!(layer.is_feature_layer());
        assert_eq!(layer.name, "Hydrants");
        assert_eq!(layer.geometry_type, Some(GeometryType::Point));
        assert_eq!(layer.wkid(), Some(2100));
        assert!(matches!(layer.renderer(), Some(Renderer::Simple(_))));
        assert!(layer.labeling_info().is_empty());

        let bounds = layer.scale_bounds();
        assert_eq!(bounds.min_scale_denominator.as_deref(), Some("50000"));
        assert_eq!(bounds.max_scale_denominator, None);
    }

    #[test]
    fn test_parse_group_layer() {
        let json = r#"{"id": 3, "name": "Basemap", "type": "Group Layer", "subLayers": [{"id": 4, "name": "Roads"}]}"#;
        let layer = LayerDescriptor::from_json(json).unwrap();
        assert!(!layer.is_feature_layer());
        assert!(layer.renderer().is_none());
        assert_eq!(layer.wkid(), None);
    }

    #[test]
    fn test_unknown_geometry_type() {
        let json = r#"{"name": "Stations", "type": "Feature Layer", "geometryType": "esriGeometryMultipoint"}"#;
        let layer = LayerDescriptor::from_json(json).unwrap();
        assert_eq!(layer.geometry_type, Some(GeometryType::Other));
    }

    #[test]
    fn test_labeling_info() {
        let json = r#"{"name": "Parcels", "type": "Feature Layer", "drawingInfo": {
            "renderer": {"type": "simple"},
            "labelingInfo": [{"labelExpression": "[PARCEL_ID]", "labelPlacement": "esriServerPolygonPlacementAlwaysHorizontal", "minScale": 5000, "maxScale": 0}]
        }}"#;
        let layer = LayerDescriptor::from_json(json).unwrap();
        let labels = layer.labeling_info();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].label_expression.as_deref(), Some("[PARCEL_ID]"));
        assert_eq!(labels[0].scale_bounds().max_scale_denominator.as_deref(), Some("5000"));
        assert!(labels[0].symbol.is_none());
    }
}
