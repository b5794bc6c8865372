//! Tests for SLD document serialization.

use sld::{
    AnchorPoint, CssParameters, ExternalGraphic, Fill, Filter, Font, Graphic, Halo, LineSymbolizer,
    Mark, PointPlacement, PointSymbolizer, PolygonSymbolizer, Stroke, StyledLayerDescriptor,
    Symbolizer, TextSymbolizer,
};

fn document_with(symbolizer: Symbolizer, filter: Option<Filter>) -> String {
    let mut doc = StyledLayerDescriptor::new();
    let rule = doc
        .create_named_layer("layer")
        .feature_type_style_mut()
        .create_rule("rule");
    rule.set_scale_denominators(Some("5000".to_string()), Some("250000".to_string()));
    rule.set_symbolizer(symbolizer);
    if let Some(filter) = filter {
        rule.set_filter(filter);
    }
    doc.to_xml().unwrap()
}

fn position(xml: &str, needle: &str) -> usize {
    xml.find(needle)
        .unwrap_or_else(|| panic!("`{}` not found in:\n{}", needle, xml))
}

// ============================================================================
// Rule structure
// ============================================================================

#[test]
fn test_rule_children_follow_schema_order() {
    let xml = document_with(
        Symbolizer::Line(LineSymbolizer::default()),
        Some(Filter::equal_to("TYPE", "A")),
    );

    let name = position(&xml, "<sld:Name>rule</sld:Name>");
    let title = position(&xml, "<sld:Title>rule</sld:Title>");
    let filter = position(&xml, "<ogc:Filter>");
    let min = position(&xml, "<sld:MinScaleDenominator>5000</sld:MinScaleDenominator>");
    let max = position(&xml, "<sld:MaxScaleDenominator>250000</sld:MaxScaleDenominator>");
    let symbolizer = position(&xml, "<sld:LineSymbolizer/>");

    assert!(name < title);
    assert!(title < filter);
    assert!(filter < min);
    assert!(min < max);
    assert!(max < symbolizer);
}

#[test]
fn test_range_filter_xml() {
    let xml = document_with(
        Symbolizer::Point(PointSymbolizer::default()),
        Some(Filter::between_inclusive("POP", "10", "50")),
    );

    let and = position(&xml, "<ogc:And>");
    let gte = position(&xml, "<ogc:PropertyIsGreaterThanOrEqualTo>");
    let lte = position(&xml, "<ogc:PropertyIsLessThanOrEqualTo>");
    assert!(and < gte && gte < lte);
    assert!(xml.contains("<ogc:PropertyName>POP</ogc:PropertyName>"));
    assert!(xml.contains("<ogc:Literal>10</ogc:Literal>"));
    assert!(xml.contains("<ogc:Literal>50</ogc:Literal>"));
}

#[test]
fn test_rule_without_symbolizer() {
    let mut doc = StyledLayerDescriptor::new();
    doc.create_named_layer("layer")
        .feature_type_style_mut()
        .create_rule("bare")
        .clear_symbolizer();
    let xml = doc.to_xml().unwrap();
    assert!(xml.contains("<sld:Title>bare</sld:Title>"));
    assert!(!xml.contains("Symbolizer"));
}

// ============================================================================
// Symbolizers
// ============================================================================

#[test]
fn test_polygon_fill_before_stroke() {
    let mut fill = Fill::default();
    fill.add_css_parameter("fill", "#ff0000");
    let mut stroke = Stroke::default();
    stroke.add_css_parameter("stroke", "#000000");

    let xml = document_with(
        Symbolizer::Polygon(PolygonSymbolizer {
            stroke: Some(stroke),
            fill: Some(fill),
        }),
        None,
    );

    let fill = position(&xml, r##"<sld:CssParameter name="fill">#ff0000</sld:CssParameter>"##);
    let stroke = position(&xml, r##"<sld:CssParameter name="stroke">#000000</sld:CssParameter>"##);
    assert!(fill < stroke);
}

#[test]
fn test_external_graphic() {
    let graphic = Graphic::external(ExternalGraphic {
        href: "hydrants/hydrants.svg".to_string(),
        format: "image/svg+xml".to_string(),
    })
    .with_size(Some("18".to_string()));

    let xml = document_with(
        Symbolizer::Point(PointSymbolizer {
            graphic: Some(graphic),
        }),
        None,
    );

    assert!(xml.contains(r#"<sld:OnlineResource xlink:type="simple" xlink:href="hydrants/hydrants.svg"/>"#));
    assert!(xml.contains("<sld:Format>image/svg+xml</sld:Format>"));
    assert!(position(&xml, "<sld:ExternalGraphic>") < position(&xml, "<sld:Size>18</sld:Size>"));
}

#[test]
fn test_mark_graphic() {
    let mut fill = Fill::default();
    fill.add_css_parameter("fill", "#00ff00");
    let mut mark = Mark::new("circle");
    mark.fill = Some(fill);

    let xml = document_with(
        Symbolizer::Point(PointSymbolizer {
            graphic: Some(Graphic::mark(mark).with_size(Some("8".to_string()))),
        }),
        None,
    );

    assert!(xml.contains("<sld:WellKnownName>circle</sld:WellKnownName>"));
    assert!(position(&xml, "<sld:Mark>") < position(&xml, "<sld:Size>8</sld:Size>"));
}

#[test]
fn test_text_symbolizer_order() {
    let mut font = Font::default();
    font.add_css_parameter("font-family", "Arial");
    let mut fill = Fill::default();
    fill.add_css_parameter("fill", "#000000");
    let mut halo_fill = Fill::default();
    halo_fill.add_css_parameter("fill", "#ffffff");

    let xml = document_with(
        Symbolizer::Text(TextSymbolizer {
            label: Some("name".to_string()),
            font: Some(font),
            label_placement: Some(PointPlacement {
                anchor_point: Some(AnchorPoint {
                    x: "0.5".to_string(),
                    y: "0.0".to_string(),
                }),
            }),
            halo: Some(Halo {
                radius: Some("2".to_string()),
                fill: Some(halo_fill),
            }),
            fill: Some(fill),
        }),
        None,
    );

    let label = position(&xml, "<sld:Label>");
    let font = position(&xml, "<sld:Font>");
    let placement = position(&xml, "<sld:LabelPlacement>");
    let halo = position(&xml, "<sld:Halo>");
    let fill = position(&xml, r##"<sld:CssParameter name="fill">#000000</sld:CssParameter>"##);
    assert!(label < font && font < placement && placement < halo && halo < fill);
    assert!(xml.contains("<sld:AnchorPointX>0.5</sld:AnchorPointX>"));
    assert!(xml.contains("<sld:AnchorPointY>0.0</sld:AnchorPointY>"));
    assert!(xml.contains("<sld:Radius>2</sld:Radius>"));
}

#[test]
fn test_graphic_stroke_precedes_parameters() {
    let mut stroke = Stroke::default();
    stroke.add_css_parameter("stroke-width", "2");
    stroke.graphic_stroke = Some(Box::new(Graphic::mark(Mark::new("dot"))));

    let xml = document_with(
        Symbolizer::Line(LineSymbolizer {
            stroke: Some(stroke),
        }),
        None,
    );
    assert!(position(&xml, "<sld:GraphicStroke>") < position(&xml, r#"name="stroke-width""#));
}
