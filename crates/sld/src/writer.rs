//! XML serialization of SLD documents.
//!
//! Elements are emitted in the order required by the SLD 1.0.0 schema
//! regardless of the order in which the model was filled in.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::model::*;
use crate::{Filter, SldError, SldResult};

const SLD_NS: &str = "http://www.opengis.net/sld";
const OGC_NS: &str = "http://www.opengis.net/ogc";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://www.opengis.net/sld http://schemas.opengis.net/sld/1.0.0/StyledLayerDescriptor.xsd";

/// SLD version written on the root element.
pub const SLD_VERSION: &str = "1.0.0";

impl StyledLayerDescriptor {
    /// Serialize to an indented UTF-8 XML document with declaration.
    pub fn to_xml(&self) -> SldResult<String> {
        let layer = self.named_layer.as_ref().ok_or(SldError::MissingNamedLayer)?;

        let mut out = SldWriter::new();
        out.decl()?;
        out.start(
            "sld:StyledLayerDescriptor",
            &[
                ("xmlns:sld", SLD_NS),
                ("xmlns:ogc", OGC_NS),
                ("xmlns:xlink", XLINK_NS),
                ("xmlns:xsi", XSI_NS),
                ("xsi:schemaLocation", SCHEMA_LOCATION),
                ("version", SLD_VERSION),
            ],
        )?;
        out.named_layer(layer)?;
        out.end("sld:StyledLayerDescriptor")?;
        out.finish()
    }
}

struct SldWriter {
    writer: Writer<Vec<u8>>,
}

impl SldWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn finish(self) -> SldResult<String> {
        let mut bytes = self.writer.into_inner();
        bytes.push(b'\n');
        Ok(String::from_utf8(bytes)?)
    }

    fn decl(&mut self) -> SldResult<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> SldResult<()> {
        let mut element = BytesStart::new(name);
        for attribute in attributes {
            element.push_attribute(*attribute);
        }
        self.writer.write_event(Event::Start(element))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> SldResult<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> SldResult<()> {
        let mut element = BytesStart::new(name);
        for attribute in attributes {
            element.push_attribute(*attribute);
        }
        self.writer.write_event(Event::Empty(element))?;
        Ok(())
    }

    fn text_element(&mut self, name: &str, attributes: &[(&str, &str)], text: &str) -> SldResult<()> {
        self.start(name, attributes)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn optional_text(&mut self, name: &str, text: Option<&str>) -> SldResult<()> {
        match text {
            Some(text) => self.text_element(name, &[], text),
            None => Ok(()),
        }
    }

    fn named_layer(&mut self, layer: &NamedLayer) -> SldResult<()> {
        self.start("sld:NamedLayer", &[])?;
        self.text_element("sld:Name", &[], &layer.name)?;

        let style = &layer.user_style;
        self.start("sld:UserStyle", &[])?;
        self.text_element("sld:Name", &[], &style.name)?;
        self.optional_text("sld:Title", style.title.as_deref())?;

        let fts = &style.feature_type_style;
        self.start("sld:FeatureTypeStyle", &[])?;
        self.optional_text("sld:Name", fts.name.as_deref())?;
        for rule in &fts.rules {
            self.rule(rule)?;
        }
        self.end("sld:FeatureTypeStyle")?;

        self.end("sld:UserStyle")?;
        self.end("sld:NamedLayer")
    }

    fn rule(&mut self, rule: &Rule) -> SldResult<()> {
        self.start("sld:Rule", &[])?;
        self.optional_text("sld:Name", rule.name.as_deref())?;
        self.text_element("sld:Title", &[], &rule.title)?;
        if let Some(filter) = &rule.filter {
            self.start("ogc:Filter", &[])?;
            self.filter(filter)?;
            self.end("ogc:Filter")?;
        }
        self.optional_text("sld:MinScaleDenominator", rule.min_scale_denominator.as_deref())?;
        self.optional_text("sld:MaxScaleDenominator", rule.max_scale_denominator.as_deref())?;
        if let Some(symbolizer) = &rule.symbolizer {
            self.symbolizer(symbolizer)?;
        }
        self.end("sld:Rule")
    }

    fn filter(&mut self, filter: &Filter) -> SldResult<()> {
        match filter {
            Filter::Comparison {
                operator,
                property,
                literal,
            } => {
                let name = format!("ogc:{}", operator.element_name());
                self.start(&name, &[])?;
                self.text_element("ogc:PropertyName", &[], property)?;
                self.text_element("ogc:Literal", &[], literal)?;
                self.end(&name)
            }
            Filter::And(children) => {
                self.start("ogc:And", &[])?;
                for child in children {
                    self.filter(child)?;
                }
                self.end("ogc:And")
            }
        }
    }

    fn symbolizer(&mut self, symbolizer: &Symbolizer) -> SldResult<()> {
        match symbolizer {
            Symbolizer::Point(point) => match &point.graphic {
                Some(graphic) => {
                    self.start("sld:PointSymbolizer", &[])?;
                    self.graphic(graphic)?;
                    self.end("sld:PointSymbolizer")
                }
                None => self.empty("sld:PointSymbolizer", &[]),
            },
            Symbolizer::Line(line) => match &line.stroke {
                Some(stroke) => {
                    self.start("sld:LineSymbolizer", &[])?;
                    self.stroke(stroke)?;
                    self.end("sld:LineSymbolizer")
                }
                None => self.empty("sld:LineSymbolizer", &[]),
            },
            Symbolizer::Polygon(polygon) => {
                if polygon.fill.is_none() && polygon.stroke.is_none() {
                    return self.empty("sld:PolygonSymbolizer", &[]);
                }
                self.start("sld:PolygonSymbolizer", &[])?;
                if let Some(fill) = &polygon.fill {
                    self.fill(fill)?;
                }
                if let Some(stroke) = &polygon.stroke {
                    self.stroke(stroke)?;
                }
                self.end("sld:PolygonSymbolizer")
            }
            Symbolizer::Text(text) => self.text_symbolizer(text),
        }
    }

    fn text_symbolizer(&mut self, text: &TextSymbolizer) -> SldResult<()> {
        if *text == TextSymbolizer::default() {
            return self.empty("sld:TextSymbolizer", &[]);
        }
        self.start("sld:TextSymbolizer", &[])?;
        if let Some(label) = &text.label {
            self.start("sld:Label", &[])?;
            self.text_element("ogc:PropertyName", &[], label)?;
            self.end("sld:Label")?;
        }
        if let Some(font) = &text.font {
            self.css_container("sld:Font", &font.parameters)?;
        }
        if let Some(placement) = &text.label_placement {
            self.start("sld:LabelPlacement", &[])?;
            match &placement.anchor_point {
                Some(anchor) => {
                    self.start("sld:PointPlacement", &[])?;
                    self.start("sld:AnchorPoint", &[])?;
                    self.text_element("sld:AnchorPointX", &[], &anchor.x)?;
                    self.text_element("sld:AnchorPointY", &[], &anchor.y)?;
                    self.end("sld:AnchorPoint")?;
                    self.end("sld:PointPlacement")?;
                }
                None => self.empty("sld:PointPlacement", &[])?,
            }
            self.end("sld:LabelPlacement")?;
        }
        if let Some(halo) = &text.halo {
            self.start("sld:Halo", &[])?;
            self.optional_text("sld:Radius", halo.radius.as_deref())?;
            if let Some(fill) = &halo.fill {
                self.fill(fill)?;
            }
            self.end("sld:Halo")?;
        }
        if let Some(fill) = &text.fill {
            self.fill(fill)?;
        }
        self.end("sld:TextSymbolizer")
    }

    fn fill(&mut self, fill: &Fill) -> SldResult<()> {
        if fill.graphic_fill.is_none() && fill.parameters.is_empty() {
            return self.empty("sld:Fill", &[]);
        }
        self.start("sld:Fill", &[])?;
        if let Some(graphic) = &fill.graphic_fill {
            self.start("sld:GraphicFill", &[])?;
            self.graphic(graphic)?;
            self.end("sld:GraphicFill")?;
        }
        self.css_parameters(&fill.parameters)?;
        self.end("sld:Fill")
    }

    fn stroke(&mut self, stroke: &Stroke) -> SldResult<()> {
        if stroke.graphic_stroke.is_none() && stroke.parameters.is_empty() {
            return self.empty("sld:Stroke", &[]);
        }
        self.start("sld:Stroke", &[])?;
        if let Some(graphic) = &stroke.graphic_stroke {
            self.start("sld:GraphicStroke", &[])?;
            self.graphic(graphic)?;
            self.end("sld:GraphicStroke")?;
        }
        self.css_parameters(&stroke.parameters)?;
        self.end("sld:Stroke")
    }

    fn css_container(&mut self, name: &str, parameters: &[CssParameter]) -> SldResult<()> {
        if parameters.is_empty() {
            return self.empty(name, &[]);
        }
        self.start(name, &[])?;
        self.css_parameters(parameters)?;
        self.end(name)
    }

    fn css_parameters(&mut self, parameters: &[CssParameter]) -> SldResult<()> {
        for parameter in parameters {
            self.text_element(
                "sld:CssParameter",
                &[("name", parameter.name.as_str())],
                &parameter.value,
            )?;
        }
        Ok(())
    }

    fn graphic(&mut self, graphic: &Graphic) -> SldResult<()> {
        self.start("sld:Graphic", &[])?;
        match &graphic.source {
            GraphicSource::External(external) => {
                self.start("sld:ExternalGraphic", &[])?;
                self.empty(
                    "sld:OnlineResource",
                    &[("xlink:type", "simple"), ("xlink:href", external.href.as_str())],
                )?;
                self.text_element("sld:Format", &[], &external.format)?;
                self.end("sld:ExternalGraphic")?;
            }
            GraphicSource::Mark(mark) => {
                self.start("sld:Mark", &[])?;
                self.text_element("sld:WellKnownName", &[], &mark.well_known_name)?;
                if let Some(fill) = &mark.fill {
                    self.fill(fill)?;
                }
                if let Some(stroke) = &mark.stroke {
                    self.stroke(stroke)?;
                }
                self.end("sld:Mark")?;
            }
        }
        self.optional_text("sld:Size", graphic.size.as_deref())?;
        self.end("sld:Graphic")
    }
}
