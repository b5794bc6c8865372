//! Common types and utilities shared across all agsdump crates.
//!
//! Models the JSON descriptors published by an ArcGIS map/feature service
//! (service, layer, renderer, symbol) and the small primitive converters
//! used when translating them into SLD.

pub mod color;
pub mod error;
pub mod layer;
pub mod renderer;
pub mod scale;
pub mod service;
pub mod naming;
pub mod source;
pub mod symbol;

pub use color::Color;
pub use error::{AgsError, AgsResult};
pub use layer::{DrawingInfo, GeometryType, LabelingInfo, LayerDescriptor, FEATURE_LAYER};
pub use renderer::{ClassBreakInfo, ClassBreaksRenderer, Renderer, SimpleRenderer, UniqueValueInfo, UniqueValueRenderer};
pub use scale::ScaleBounds;
pub use service::{LayerSummary, ServiceDescriptor};
pub use source::DescriptorSource;
pub use symbol::{
    Font, LineSymbol, MarkerSymbol, Outline, PictureMarkerSymbol, SimpleFillSymbol, Symbol, SymbolStyle,
    TextSymbol,
};
