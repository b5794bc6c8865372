//! ArcGIS to SLD symbology translation.
//!
//! Implements:
//! - Renderer dispatch (simple, unique value, class breaks, geometry default)
//! - Symbol conversion (picture/simple marker, line, fill, text)
//! - Symbol style refinements (marker shapes, dashes)
//! - Icon extraction for picture markers
//! - The per-layer orchestration that fetches a descriptor and writes `.sld`

pub mod context;
pub mod icon;
pub mod labels;
pub mod layer_style;
pub mod renderer;
pub mod substyle;
pub mod symbol;

pub use context::LayerContext;
pub use icon::IconFormat;
pub use layer_style::{build_document, dump_layer_style, LayerStyleOutcome};
pub use renderer::dispatch;
