//! SLD 1.0.0 object model.
//!
//! A document owns one `NamedLayer` -> `UserStyle` -> `FeatureTypeStyle`,
//! which in turn owns an ordered list of rules. Every rule holds at most one
//! symbolizer.

use crate::Filter;

/// Root `sld:StyledLayerDescriptor` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledLayerDescriptor {
    pub named_layer: Option<NamedLayer>,
}

impl StyledLayerDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the document skeleton: NamedLayer, UserStyle and
    /// FeatureTypeStyle all carry `name`.
    pub fn create_named_layer(&mut self, name: impl Into<String>) -> &mut NamedLayer {
        self.named_layer.insert(NamedLayer::new(name))
    }

    pub fn feature_type_style(&self) -> Option<&FeatureTypeStyle> {
        self.named_layer
            .as_ref()
            .map(|layer| &layer.user_style.feature_type_style)
    }

    /// All rules of the document, empty when there is no NamedLayer.
    pub fn rules(&self) -> &[Rule] {
        self.feature_type_style()
            .map(|fts| fts.rules.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedLayer {
    pub name: String,
    pub user_style: UserStyle,
}

impl NamedLayer {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            user_style: UserStyle {
                name: name.clone(),
                title: Some(name.clone()),
                feature_type_style: FeatureTypeStyle {
                    name: Some(name.clone()),
                    rules: Vec::new(),
                },
            },
            name,
        }
    }

    pub fn feature_type_style_mut(&mut self) -> &mut FeatureTypeStyle {
        &mut self.user_style.feature_type_style
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStyle {
    pub name: String,
    pub title: Option<String>,
    pub feature_type_style: FeatureTypeStyle,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTypeStyle {
    pub name: Option<String>,
    pub rules: Vec<Rule>,
}

impl FeatureTypeStyle {
    /// Append a rule carrying the default (empty) PointSymbolizer.
    pub fn create_rule(&mut self, title: impl Into<String>) -> &mut Rule {
        self.create_rule_with(title, SymbolizerKind::Point)
    }

    /// Append a rule carrying an empty symbolizer of `kind`.
    pub fn create_rule_with(&mut self, title: impl Into<String>, kind: SymbolizerKind) -> &mut Rule {
        let mut rule = Rule::new(title);
        rule.symbolizer = Some(Symbolizer::empty(kind));
        self.rules.push(rule);
        let last = self.rules.len() - 1;
        &mut self.rules[last]
    }
}

/// `sld:Rule`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rule {
    pub name: Option<String>,
    pub title: String,
    pub filter: Option<Filter>,
    pub min_scale_denominator: Option<String>,
    pub max_scale_denominator: Option<String>,
    pub symbolizer: Option<Symbolizer>,
}

impl Rule {
    /// A rule named and titled `title`, without symbolizer.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            name: Some(title.clone()),
            title,
            ..Self::default()
        }
    }

    pub fn set_scale_denominators(&mut self, min: Option<String>, max: Option<String>) -> &mut Self {
        self.min_scale_denominator = min;
        self.max_scale_denominator = max;
        self
    }

    pub fn set_filter(&mut self, filter: Filter) -> &mut Self {
        self.filter = Some(filter);
        self
    }

    /// Drop whatever symbolizer the rule currently has.
    pub fn clear_symbolizer(&mut self) -> &mut Self {
        self.symbolizer = None;
        self
    }

    /// Install `symbolizer`, replacing any previous one.
    pub fn set_symbolizer(&mut self, symbolizer: Symbolizer) -> &mut Self {
        self.symbolizer = Some(symbolizer);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolizerKind {
    Point,
    Line,
    Polygon,
    Text,
}

/// One of the four SLD symbolizers.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbolizer {
    Point(PointSymbolizer),
    Line(LineSymbolizer),
    Polygon(PolygonSymbolizer),
    Text(TextSymbolizer),
}

impl Symbolizer {
    pub fn empty(kind: SymbolizerKind) -> Self {
        match kind {
            SymbolizerKind::Point => Symbolizer::Point(PointSymbolizer::default()),
            SymbolizerKind::Line => Symbolizer::Line(LineSymbolizer::default()),
            SymbolizerKind::Polygon => Symbolizer::Polygon(PolygonSymbolizer::default()),
            SymbolizerKind::Text => Symbolizer::Text(TextSymbolizer::default()),
        }
    }

    pub fn kind(&self) -> SymbolizerKind {
        match self {
            Symbolizer::Point(_) => SymbolizerKind::Point,
            Symbolizer::Line(_) => SymbolizerKind::Line,
            Symbolizer::Polygon(_) => SymbolizerKind::Polygon,
            Symbolizer::Text(_) => SymbolizerKind::Text,
        }
    }

    /// The symbolizer's stroke, for line and polygon symbolizers.
    pub fn stroke_mut(&mut self) -> Option<&mut Stroke> {
        match self {
            Symbolizer::Line(line) => line.stroke.as_mut(),
            Symbolizer::Polygon(polygon) => polygon.stroke.as_mut(),
            Symbolizer::Point(_) | Symbolizer::Text(_) => None,
        }
    }

    pub fn stroke(&self) -> Option<&Stroke> {
        match self {
            Symbolizer::Line(line) => line.stroke.as_ref(),
            Symbolizer::Polygon(polygon) => polygon.stroke.as_ref(),
            Symbolizer::Point(_) | Symbolizer::Text(_) => None,
        }
    }

    /// Place a graphic where SLD allows one: the point graphic, the polygon's
    /// `GraphicFill` or the line's `GraphicStroke`. Text symbolizers ignore it.
    pub fn attach_graphic(&mut self, graphic: Graphic) {
        match self {
            Symbolizer::Point(point) => point.graphic = Some(graphic),
            Symbolizer::Polygon(polygon) => {
                polygon.fill.get_or_insert_with(Fill::default).graphic_fill = Some(Box::new(graphic))
            }
            Symbolizer::Line(line) => {
                line.stroke.get_or_insert_with(Stroke::default).graphic_stroke = Some(Box::new(graphic))
            }
            Symbolizer::Text(_) => {}
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSymbolizer {
    pub graphic: Option<Graphic>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSymbolizer {
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonSymbolizer {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextSymbolizer {
    /// Attribute rendered as the label text
    pub label: Option<String>,
    pub font: Option<Font>,
    pub label_placement: Option<PointPlacement>,
    pub halo: Option<Halo>,
    pub fill: Option<Fill>,
}

/// `sld:CssParameter name="...">value<`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssParameter {
    pub name: String,
    pub value: String,
}

/// Elements holding an ordered list of CSS parameters.
pub trait CssParameters {
    fn parameters(&self) -> &[CssParameter];
    fn parameters_mut(&mut self) -> &mut Vec<CssParameter>;

    fn add_css_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.parameters_mut().push(CssParameter {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Value of the first parameter called `name`.
    fn css_parameter(&self, name: &str) -> Option<&str> {
        self.parameters()
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

macro_rules! impl_css_parameters {
    ($($ty:ty),+) => {
        $(
            impl CssParameters for $ty {
                fn parameters(&self) -> &[CssParameter] {
                    &self.parameters
                }

                fn parameters_mut(&mut self) -> &mut Vec<CssParameter> {
                    &mut self.parameters
                }
            }
        )+
    };
}

impl_css_parameters!(Fill, Stroke, Font);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fill {
    pub graphic_fill: Option<Box<Graphic>>,
    pub parameters: Vec<CssParameter>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    pub graphic_stroke: Option<Box<Graphic>>,
    pub parameters: Vec<CssParameter>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    pub parameters: Vec<CssParameter>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Halo {
    pub radius: Option<String>,
    pub fill: Option<Fill>,
}

/// `sld:PointPlacement` with its anchor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointPlacement {
    pub anchor_point: Option<AnchorPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPoint {
    pub x: String,
    pub y: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    pub source: GraphicSource,
    pub size: Option<String>,
}

impl Graphic {
    pub fn mark(mark: Mark) -> Self {
        Self {
            source: GraphicSource::Mark(mark),
            size: None,
        }
    }

    pub fn external(external: ExternalGraphic) -> Self {
        Self {
            source: GraphicSource::External(external),
            size: None,
        }
    }

    pub fn with_size(mut self, size: Option<String>) -> Self {
        self.size = size;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GraphicSource {
    Mark(Mark),
    External(ExternalGraphic),
}

/// Built-in shape such as `circle` or `square`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub well_known_name: String,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

impl Mark {
    pub fn new(well_known_name: impl Into<String>) -> Self {
        Self {
            well_known_name: well_known_name.into(),
            fill: None,
            stroke: None,
        }
    }
}

/// Image referenced through an `OnlineResource` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalGraphic {
    pub href: String,
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_names() {
        let mut doc = StyledLayerDescriptor::new();
        let layer = doc.create_named_layer("water-mains");
        assert_eq!(layer.user_style.name, "water-mains");
        assert_eq!(layer.feature_type_style_mut().name.as_deref(), Some("water-mains"));
        assert!(doc.rules().is_empty());
    }

    #[test]
    fn test_create_rule_has_default_point_symbolizer() {
        let mut fts = FeatureTypeStyle::default();
        let rule = fts.create_rule("hydrants");
        assert_eq!(rule.title, "hydrants");
        assert_eq!(rule.symbolizer, Some(Symbolizer::Point(PointSymbolizer::default())));
        rule.clear_symbolizer();
        assert!(fts.rules[0].symbolizer.is_none());
    }

    #[test]
    fn test_create_rule_with_kind() {
        let mut fts = FeatureTypeStyle::default();
        let rule = fts.create_rule_with("roads", SymbolizerKind::Line);
        assert_eq!(rule.symbolizer.as_ref().map(Symbolizer::kind), Some(SymbolizerKind::Line));
    }

    #[test]
    fn test_css_parameters() {
        let mut fill = Fill::default();
        fill.add_css_parameter("fill", "#ff0000")
            .add_css_parameter("fill-opacity", "0.5");
        assert_eq!(fill.css_parameter("fill"), Some("#ff0000"));
        assert_eq!(fill.css_parameter("fill-opacity"), Some("0.5"));
        assert_eq!(fill.css_parameter("stroke"), None);
    }

    #[test]
    fn test_attach_graphic_by_kind() {
        let graphic = Graphic::mark(Mark::new("dot")).with_size(Some("4".to_string()));

        let mut point = Symbolizer::empty(SymbolizerKind::Point);
        point.attach_graphic(graphic.clone());
        assert!(matches!(point, Symbolizer::Point(PointSymbolizer { graphic: Some(_) })));

        let mut polygon = Symbolizer::empty(SymbolizerKind::Polygon);
        polygon.attach_graphic(graphic.clone());
        match polygon {
            Symbolizer::Polygon(p) => assert_eq!(p.fill.unwrap().graphic_fill, Some(Box::new(graphic.clone()))),
            other => panic!("Expected polygon, got {:?}", other),
        }

        let mut line = Symbolizer::empty(SymbolizerKind::Line);
        line.attach_graphic(graphic.clone());
        assert_eq!(line.stroke().unwrap().graphic_stroke, Some(Box::new(graphic.clone())));

        let mut text = Symbolizer::empty(SymbolizerKind::Text);
        text.attach_graphic(graphic);
        assert_eq!(text, Symbolizer::empty(SymbolizerKind::Text));
    }
}
