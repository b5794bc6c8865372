//! OGC Styled Layer Descriptor (SLD 1.0.0) documents.
//!
//! Provides:
//! - An owned object model (`StyledLayerDescriptor` down to `CssParameter`)
//! - Filter Encoding comparisons combined with `ogc:And`
//! - A `quick-xml` writer producing indented, UTF-8, schema-ordered XML

pub mod error;
pub mod filter;
pub mod model;
pub mod writer;

pub use error::{SldError, SldResult};
pub use filter::{ComparisonOperator, Filter};
pub use model::{
    AnchorPoint, CssParameter, CssParameters, ExternalGraphic, FeatureTypeStyle, Fill, Font, Graphic,
    GraphicSource, Halo, LineSymbolizer, Mark, NamedLayer, PointPlacement, PointSymbolizer,
    PolygonSymbolizer, Rule, Stroke, StyledLayerDescriptor, Symbolizer, SymbolizerKind, TextSymbolizer,
    UserStyle,
};
