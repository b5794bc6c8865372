//! Common test fixtures for agsdump tests.
//!
//! ArcGIS REST descriptors trimmed down to the fields agsdump reads, covering
//! every renderer and symbol type it translates.

use ags_common::LayerDescriptor;

/// A 1x1 transparent PNG, base64 encoded.
pub const PNG_1X1_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Parse a layer fixture.
///
/// Panics on invalid JSON; fixtures are expected to be valid.
pub fn layer(json: &str) -> LayerDescriptor {
    LayerDescriptor::from_json(json).expect("fixture must be a valid layer descriptor")
}

/// Service descriptors (`GET <serviceUrl>?f=json`).
pub mod services {
    /// Utility network with feature, group and raster layers.
    pub const UTILITIES: &str = r#"{
        "currentVersion": 10.61,
        "mapName": "Utilities",
        "layers": [
            {"id": 0, "name": "Hydrants", "parentLayerId": -1, "subLayerIds": null},
            {"id": 1, "name": "Basemap", "parentLayerId": -1, "subLayerIds": [2]},
            {"id": 2, "name": "Roads", "parentLayerId": 1, "subLayerIds": null}
        ]
    }"#;
}

/// Layer descriptors (`GET <serviceUrl>/<layerId>?f=json`).
pub mod layers {
    /// Simple renderer, circle markers, visible below 1:50000.
    pub const HYDRANTS_SIMPLE: &str = r#"{
        "id": 0,
        "name": "Hydrants",
        "type": "Feature Layer",
        "geometryType": "esriGeometryPoint",
        "minScale": 0,
        "maxScale": 50000,
        "extent": {"xmin": 0, "ymin": 0, "xmax": 1, "ymax": 1, "spatialReference": {"wkid": 2100, "latestWkid": 2100}},
        "drawingInfo": {
            "renderer": {
                "type": "simple",
                "symbol": {"type": "esriSMS", "style": "esriSMSCircle", "color": [255, 0, 0, 255], "size": 6, "angle": 0,
                           "outline": {"color": [0, 0, 0, 255], "width": 1}},
                "label": "",
                "description": ""
            },
            "transparency": 0,
            "labelingInfo": null
        }
    }"#;

    /// A group layer; has no renderer.
    pub const BASEMAP_GROUP: &str = r#"{
        "id": 1,
        "name": "Basemap",
        "type": "Group Layer",
        "minScale": 0,
        "maxScale": 0,
        "subLayers": [{"id": 2, "name": "Roads"}]
    }"#;

    /// Unique value renderer on `TYPE`, one dashed class.
    pub const ROADS_UNIQUE_VALUE: &str = r#"{
        "id": 2,
        "name": "Roads",
        "type": "Feature Layer",
        "geometryType": "esriGeometryPolyline",
        "minScale": 100000,
        "maxScale": 0,
        "drawingInfo": {
            "renderer": {
                "type": "uniqueValue",
                "field1": "TYPE",
                "field2": null,
                "field3": null,
                "uniqueValueInfos": [
                    {"value": "highway", "label": "Highway",
                     "symbol": {"type": "esriSLS", "style": "esriSLSSolid", "color": [230, 0, 0, 255], "width": 3}},
                    {"value": "street", "label": "Street",
                     "symbol": {"type": "esriSLS", "style": "esriSLSSolid", "color": [80, 80, 80, 255], "width": 1.5}},
                    {"value": "trail",
                     "symbol": {"type": "esriSLS", "style": "esriSLSDash", "color": [0, 120, 0, 255], "width": 1}}
                ]
            }
        }
    }"#;

    /// Class breaks on `POP` with breaks 0-10, 10-50 and 50-100.
    pub const POPULATION_CLASS_BREAKS: &str = r#"{
        "id": 3,
        "name": "Municipalities",
        "type": "Feature Layer",
        "geometryType": "esriGeometryPolygon",
        "minScale": 0,
        "maxScale": 0,
        "drawingInfo": {
            "renderer": {
                "type": "classBreaks",
                "field": "POP",
                "minValue": 0,
                "classBreakInfos": [
                    {"classMaxValue": 10, "label": "low",
                     "symbol": {"type": "esriSFS", "style": "esriSFSSolid", "color": [255, 255, 178, 255],
                                "outline": {"type": "esriSLS", "style": "esriSLSSolid", "color": [110, 110, 110, 255], "width": 0.4}}},
                    {"classMaxValue": 50, "label": "mid",
                     "symbol": {"type": "esriSFS", "style": "esriSFSSolid", "color": [253, 141, 60, 255],
                                "outline": {"type": "esriSLS", "style": "esriSLSSolid", "color": [110, 110, 110, 255], "width": 0.4}}},
                    {"classMaxValue": 100, "label": "high",
                     "symbol": {"type": "esriSFS", "style": "esriSFSSolid", "color": [189, 0, 38, 255],
                                "outline": {"type": "esriSLS", "style": "esriSLSSolid", "color": [110, 110, 110, 255], "width": 0.4}}}
                ]
            }
        }
    }"#;

    /// Unique value renderer with picture marker symbols.
    pub const STATIONS_PICTURE_MARKER: &str = r#"{
        "id": 4,
        "name": "Bus Stations",
        "type": "Feature Layer",
        "geometryType": "esriGeometryPoint",
        "drawingInfo": {
            "renderer": {
                "type": "uniqueValue",
                "field1": "KIND",
                "uniqueValueInfos": [
                    {"value": 1, "label": "Main Terminal",
                     "symbol": {"type": "esriPMS", "url": "4f2a", "contentType": "image/png", "width": 18, "height": 18, "angle": 0,
                                "imageData": "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg=="}}
                ]
            }
        }
    }"#;

    /// Simple fill renderer with one labeling class.
    pub const PARCELS_LABELED: &str = r#"{
        "id": 5,
        "name": "Parcels",
        "type": "Feature Layer",
        "geometryType": "esriGeometryPolygon",
        "minScale": 25000,
        "maxScale": 0,
        "drawingInfo": {
            "renderer": {
                "type": "simple",
                "symbol": {"type": "esriSFS", "style": "esriSFSNull",
                           "outline": {"type": "esriSLS", "style": "esriSLSSolid", "color": [0, 0, 0, 255], "width": 1}}
            },
            "labelingInfo": [
                {"labelExpression": "[PARCEL_ID]", "labelPlacement": "esriServerPolygonPlacementAlwaysHorizontal",
                 "minScale": 5000, "maxScale": 0,
                 "symbol": {"type": "esriTS", "color": [0, 0, 0, 255], "haloColor": [255, 255, 255, 255], "haloSize": 1,
                            "horizontalAlignment": "center", "verticalAlignment": "baseline",
                            "font": {"family": "Arial", "size": 8, "style": "normal", "weight": "bold", "decoration": "none"}}}
            ]
        }
    }"#;

    /// Renderer type without a handler on a polygon layer.
    pub const DENSITY_HEATMAP: &str = r#"{
        "id": 6,
        "name": "Incident Density",
        "type": "Feature Layer",
        "geometryType": "esriGeometryPolygon",
        "minScale": 0,
        "maxScale": 0,
        "drawingInfo": {"renderer": {"type": "heatmap", "blurRadius": 10, "colorStops": []}}
    }"#;

    /// Renderer type without a handler on a multipoint layer.
    pub const SENSORS_MULTIPOINT: &str = r#"{
        "id": 7,
        "name": "Sensors",
        "type": "Feature Layer",
        "geometryType": "esriGeometryMultipoint",
        "drawingInfo": {"renderer": {"type": "dotDensity"}}
    }"#;
}

/// Query responses (`GET <serviceUrl>/<layerId>/query`).
pub mod queries {
    /// Two hydrants.
    pub const HYDRANT_FEATURES: &str = r#"{
        "displayFieldName": "NAME",
        "geometryType": "esriGeometryPoint",
        "spatialReference": {"wkid": 2100, "latestWkid": 2100},
        "fields": [{"name": "OBJECTID", "type": "esriFieldTypeOID", "alias": "OBJECTID"}],
        "features": [
            {"attributes": {"OBJECTID": 1}, "geometry": {"x": 475000.0, "y": 4200000.0}},
            {"attributes": {"OBJECTID": 2}, "geometry": {"x": 475100.0, "y": 4200100.0}}
        ]
    }"#;

    /// The error body ArcGIS sends for a failed query.
    pub const QUERY_ERROR: &str = r#"{
        "error": {"code": 400, "message": "Unable to complete operation.", "details": ["Unable to perform query operation."]}
    }"#;
}
