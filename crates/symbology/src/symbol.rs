//! ArcGIS symbol to SLD symbolizer conversion.
//!
//! Each converter builds a symbolizer for one symbol type and installs it on
//! the rule. Picture markers additionally write their icon next to the SLD.

use serde_json::Number;
use sld::{
    AnchorPoint, CssParameters, ExternalGraphic, Font, Graphic, Halo, LineSymbolizer, PointPlacement,
    PointSymbolizer, PolygonSymbolizer, Rule, Stroke, Symbolizer, SymbolizerKind, TextSymbolizer,
};
use tracing::{debug, warn};

use ags_common::naming::underscored;
use ags_common::{
    AgsResult, Color, LineSymbol, MarkerSymbol, PictureMarkerSymbol, SimpleFillSymbol, Symbol, TextSymbol,
};

use crate::icon::{write_icon, IconFormat};
use crate::substyle::{apply_style, solid_fill};
use crate::LayerContext;

/// Convert a renderer symbol into the rule's symbolizer.
///
/// Text symbols only make sense for labels and unknown types have no SLD
/// counterpart; both leave the rule untouched.
pub fn convert_symbol(ctx: &LayerContext, rule: &mut Rule, symbol: &Symbol) -> AgsResult<()> {
    match symbol {
        Symbol::PictureMarker(marker) => convert_picture_marker(ctx, rule, marker)?,
        Symbol::SimpleFill(fill) => convert_fill(rule, fill),
        Symbol::SimpleLine(line) => convert_line(rule, line),
        Symbol::SimpleMarker(marker) => convert_marker(rule, marker),
        Symbol::Text(_) | Symbol::Unsupported => {
            debug!(
                rule = %rule.title,
                symbol_type = symbol.type_name(),
                "No symbolizer for symbol type"
            );
        }
    }
    Ok(())
}

/// esriPMS: an ExternalGraphic pointing at an icon extracted from `imageData`.
pub fn convert_picture_marker(
    ctx: &LayerContext,
    rule: &mut Rule,
    symbol: &PictureMarkerSymbol,
) -> AgsResult<()> {
    let Some(image_data) = symbol.image_data.as_deref() else {
        warn!(rule = %rule.title, "Picture marker without imageData, skipping");
        return Ok(());
    };

    let content_type = symbol.content_type.as_deref();
    let (ext, format) = ctx.icon_format.resolve(content_type);
    let file_name = format!("{}.{}", underscored(&rule.title), ext);
    write_icon(&ctx.icon_dir().join(&file_name), image_data, content_type, ctx.icon_format)?;

    let size = match ctx.icon_format {
        IconFormat::Svg => symbol.width.as_ref().map(Number::to_string),
        IconFormat::Img => None,
    };
    let graphic = Graphic::external(ExternalGraphic {
        href: format!("{}/{}", ctx.name, file_name),
        format,
    })
    .with_size(size);

    rule.set_symbolizer(Symbolizer::Point(PointSymbolizer {
        graphic: Some(graphic),
    }));
    Ok(())
}

/// esriSFS: polygon fill plus an optional outline stroke.
pub fn convert_fill(rule: &mut Rule, symbol: &SimpleFillSymbol) {
    let mut polygon = PolygonSymbolizer {
        fill: symbol.color.map(solid_fill),
        stroke: None,
    };

    if let Some(outline) = &symbol.outline {
        if let Some(color) = outline.color {
            let mut stroke = bevel_stroke(Some(color), outline.width.as_ref());
            stroke.add_css_parameter("stroke-opacity", color.opacity());
            polygon.stroke = Some(stroke);
        }
    }

    let mut symbolizer = Symbolizer::Polygon(polygon);
    apply_style(&mut symbolizer, symbol.style, symbol);
    rule.set_symbolizer(symbolizer);
}

/// esriSLS: a bevelled stroke, taken from the nested outline when present.
pub fn convert_line(rule: &mut Rule, symbol: &LineSymbol) {
    let resolved = symbol.stroke();
    let mut symbolizer = Symbolizer::Line(LineSymbolizer {
        stroke: Some(bevel_stroke(resolved.color, resolved.width.as_ref())),
    });
    apply_style(&mut symbolizer, resolved.style, symbol);
    rule.set_symbolizer(symbolizer);
}

/// esriSMS: a bare point symbolizer; the style adds the mark.
pub fn convert_marker(rule: &mut Rule, symbol: &MarkerSymbol) {
    let mut symbolizer = Symbolizer::empty(SymbolizerKind::Point);
    apply_style(&mut symbolizer, symbol.style, symbol);
    rule.set_symbolizer(symbolizer);
}

/// esriTS: a text symbolizer labelling features with `label_property`.
///
/// `label_placement` is the ArcGIS placement name; only a point anchor derived
/// from the symbol's alignment is emitted.
pub fn convert_text(rule: &mut Rule, label_property: &str, label_placement: Option<&str>, symbol: &TextSymbol) {
    debug!(label = label_property, placement = ?label_placement, "Converting text symbol");

    let mut text = TextSymbolizer {
        label: Some(label_property.to_string()),
        fill: symbol.color.map(solid_fill),
        ..TextSymbolizer::default()
    };

    if let Some(font) = &symbol.font {
        let mut sld_font = Font::default();
        if let Some(family) = &font.family {
            sld_font.add_css_parameter("font-family", family.as_str());
        }
        if let Some(size) = &font.size {
            sld_font.add_css_parameter("font-size", size.to_string());
        }
        if let Some(style) = &font.style {
            sld_font.add_css_parameter("font-style", style.as_str());
        }
        if let Some(weight) = &font.weight {
            sld_font.add_css_parameter("font-weight", weight.as_str());
        }
        text.font = Some(sld_font);
    }

    if let Some(size) = symbol.halo() {
        text.halo = Some(Halo {
            radius: Some(size.to_string()),
            fill: symbol.halo_color.map(solid_fill),
        });
    }

    text.label_placement = Some(PointPlacement {
        anchor_point: Some(AnchorPoint {
            x: anchor_x(symbol.horizontal_alignment.as_deref()).to_string(),
            y: anchor_y(symbol.vertical_alignment.as_deref()).to_string(),
        }),
    });

    rule.set_symbolizer(Symbolizer::Text(text));
}

fn anchor_x(alignment: Option<&str>) -> &'static str {
    match alignment {
        Some("left") => "0.0",
        Some("center") => "0.5",
        _ => "1.0",
    }
}

fn anchor_y(alignment: Option<&str>) -> &'static str {
    match alignment {
        Some("bottom") | Some("baseline") => "0.0",
        Some("center") => "0.5",
        _ => "1.0",
    }
}

fn bevel_stroke(color: Option<Color>, width: Option<&Number>) -> Stroke {
    let mut stroke = Stroke::default();
    if let Some(color) = color {
        stroke.add_css_parameter("stroke", color.to_hex());
    }
    if let Some(width) = width {
        stroke.add_css_parameter("stroke-width", width.to_string());
    }
    stroke.add_css_parameter("stroke-linejoin", "bevel");
    stroke
}

#[cfg(test)]
mod tests {
    use super::*;
    use sld::GraphicSource;

    fn text_symbol(json: &str) -> TextSymbol {
        serde_json::from_str(json).unwrap()
    }

    fn text_of(rule: &Rule) -> &TextSymbolizer {
        match rule.symbolizer.as_ref() {
            Some(Symbolizer::Text(text)) => text,
            other => panic!("Expected text symbolizer, got {:?}", other),
        }
    }

    #[test]
    fn test_anchor_points() {
        assert_eq!(anchor_x(Some("left")), "0.0");
        assert_eq!(anchor_x(Some("center")), "0.5");
        assert_eq!(anchor_x(Some("right")), "1.0");
        assert_eq!(anchor_x(None), "1.0");

        assert_eq!(anchor_y(Some("bottom")), "0.0");
        assert_eq!(anchor_y(Some("baseline")), "0.0");
        assert_eq!(anchor_y(Some("center")), "0.5");
        assert_eq!(anchor_y(Some("top")), "1.0");
    }

    #[test]
    fn test_fill_with_outline() {
        let symbol: SimpleFillSymbol = serde_json::from_str(
            r#"{"style": "esriSFSSolid", "color": [115, 178, 255, 128],
                "outline": {"type": "esriSLS", "color": [110, 110, 110, 255], "width": 0.4}}"#,
        )
        .unwrap();
        let mut rule = Rule::new("parcels");
        convert_fill(&mut rule, &symbol);

        match rule.symbolizer.unwrap() {
            Symbolizer::Polygon(polygon) => {
                let fill = polygon.fill.unwrap();
                assert_eq!(fill.css_parameter("fill"), Some("#73b2ff"));
                assert!(fill.graphic_fill.is_none());

                let stroke = polygon.stroke.unwrap();
                let names: Vec<&str> = stroke.parameters.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, vec!["stroke", "stroke-width", "stroke-linejoin", "stroke-opacity"]);
                assert_eq!(stroke.css_parameter("stroke-width"), Some("0.4"));
                assert_eq!(stroke.css_parameter("stroke-linejoin"), Some("bevel"));
                assert_eq!(stroke.css_parameter("stroke-opacity"), Some("1"));
            }
            other => panic!("Expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_fill_without_colors() {
        let symbol: SimpleFillSymbol =
            serde_json::from_str(r#"{"style": "esriSFSNull", "outline": {"width": 1}}"#).unwrap();
        let mut rule = Rule::new("empty");
        convert_fill(&mut rule, &symbol);
        assert_eq!(rule.symbolizer, Some(Symbolizer::empty(SymbolizerKind::Polygon)));
    }

    #[test]
    fn test_dashed_line() {
        let symbol: LineSymbol =
            serde_json::from_str(r#"{"style": "esriSLSDash", "color": [0, 0, 0, 255], "width": 2}"#).unwrap();
        let mut rule = Rule::new("trails");
        convert_line(&mut rule, &symbol);

        let stroke = rule.symbolizer.as_ref().and_then(Symbolizer::stroke).unwrap();
        let names: Vec<&str> = stroke.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["stroke", "stroke-width", "stroke-linejoin", "stroke-linecap", "stroke-dasharray"]
        );
        assert_eq!(stroke.css_parameter("stroke-width"), Some("2"));
    }

    #[test]
    fn test_marker_circle() {
        let symbol: MarkerSymbol = serde_json::from_str(
            r#"{"style": "esriSMSCircle", "color": [255, 0, 0, 255], "size": 6}"#,
        )
        .unwrap();
        let mut rule = Rule::new("hydrants");
        convert_marker(&mut rule, &symbol);

        match rule.symbolizer.unwrap() {
            Symbolizer::Point(PointSymbolizer { graphic: Some(graphic) }) => {
                assert_eq!(graphic.size.as_deref(), Some("6"));
                assert!(matches!(graphic.source, GraphicSource::Mark(ref mark) if mark.well_known_name == "circle"));
            }
            other => panic!("Expected point graphic, got {:?}", other),
        }
    }

    #[test]
    fn test_text_symbol() {
        let symbol = text_symbol(
            r#"{"type": "esriTS", "color": [0, 0, 0, 255], "haloColor": [255, 255, 255, 255], "haloSize": 1,
                "horizontalAlignment": "center", "verticalAlignment": "baseline",
                "font": {"family": "Arial", "size": 8, "style": "normal", "weight": "bold", "decoration": "none"}}"#,
        );
        let mut rule = Rule::new("Labels");
        convert_text(&mut rule, "name", Some("esriServerPointLabelPlacementAboveRight"), &symbol);

        let text = text_of(&rule);
        assert_eq!(text.label.as_deref(), Some("name"));
        assert_eq!(text.fill.as_ref().unwrap().css_parameter("fill"), Some("#000000"));

        let font = text.font.as_ref().unwrap();
        let names: Vec<&str> = font.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["font-family", "font-size", "font-style", "font-weight"]);
        assert_eq!(font.css_parameter("font-size"), Some("8"));

        let halo = text.halo.as_ref().unwrap();
        assert_eq!(halo.radius.as_deref(), Some("1"));
        let halo_fill = halo.fill.as_ref().unwrap();
        assert_eq!(halo_fill.css_parameter("fill"), Some("#ffffff"));
        assert_eq!(halo_fill.css_parameter("fill-opacity"), Some("1"));

        let anchor = text.label_placement.as_ref().and_then(|p| p.anchor_point.as_ref()).unwrap();
        assert_eq!((anchor.x.as_str(), anchor.y.as_str()), ("0.5", "0.0"));
    }

    #[test]
    fn test_text_symbol_without_halo_or_font() {
        let symbol = text_symbol(r#"{"type": "esriTS", "color": [0, 0, 0, 255], "haloSize": 0}"#);
        let mut rule = Rule::new("Labels");
        convert_text(&mut rule, "id", None, &symbol);

        let text = text_of(&rule);
        assert!(text.halo.is_none());
        assert!(text.font.is_none());
        let anchor = text.label_placement.as_ref().and_then(|p| p.anchor_point.as_ref()).unwrap();
        assert_eq!((anchor.x.as_str(), anchor.y.as_str()), ("1.0", "1.0"));
    }
}
