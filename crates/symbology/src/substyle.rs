//! Refinements keyed by an ArcGIS symbol `style`.
//!
//! Runs after a symbol converter has built the basic symbolizer. Solid styles
//! need nothing (solid is the SLD default), dashes extend the existing stroke,
//! marker shapes add a `Mark` graphic, and anything unrecognized falls back to
//! a generic `dot` mark.

use sld::{CssParameters, Fill, Graphic, Mark, Stroke, Symbolizer};
use tracing::debug;

use ags_common::{Color, LineSymbol, MarkerSymbol, SimpleFillSymbol, SymbolStyle};

/// Color, size and mark outline a style refinement may draw from its symbol.
pub trait SymbolPaint {
    fn paint_color(&self) -> Option<Color>;
    fn paint_size(&self) -> Option<String>;

    fn paint_outline(&self) -> Option<Stroke> {
        None
    }
}

impl SymbolPaint for MarkerSymbol {
    fn paint_color(&self) -> Option<Color> {
        self.color
    }

    fn paint_size(&self) -> Option<String> {
        self.size.as_ref().map(ToString::to_string)
    }

    fn paint_outline(&self) -> Option<Stroke> {
        let outline = self.outline.as_ref()?;
        if outline.color.is_none() && outline.width.is_none() {
            return None;
        }

        let mut stroke = Stroke::default();
        if let Some(color) = outline.color {
            stroke
                .add_css_parameter("stroke", color.to_hex())
                .add_css_parameter("stroke-opacity", color.opacity());
        }
        if let Some(width) = &outline.width {
            stroke.add_css_parameter("stroke-width", width.to_string());
        }
        Some(stroke)
    }
}

impl SymbolPaint for LineSymbol {
    fn paint_color(&self) -> Option<Color> {
        self.color
    }

    fn paint_size(&self) -> Option<String> {
        None
    }
}

impl SymbolPaint for SimpleFillSymbol {
    fn paint_color(&self) -> Option<Color> {
        self.color
    }

    fn paint_size(&self) -> Option<String> {
        None
    }
}

/// Apply the refinement for `style` to `symbolizer`.
pub fn apply_style(symbolizer: &mut Symbolizer, style: Option<SymbolStyle>, symbol: &impl SymbolPaint) {
    match style.unwrap_or(SymbolStyle::Other) {
        SymbolStyle::MarkerCircle => add_mark(symbolizer, "circle", symbol),
        SymbolStyle::MarkerSquare => add_mark(symbolizer, "square", symbol),
        SymbolStyle::MarkerCross => add_mark(symbolizer, "cross", symbol),
        SymbolStyle::MarkerX => add_mark(symbolizer, "x", symbol),
        SymbolStyle::MarkerTriangle => add_mark(symbolizer, "triangle", symbol),
        SymbolStyle::LineDash => dash(symbolizer),
        SymbolStyle::LineSolid | SymbolStyle::FillSolid | SymbolStyle::FillNull => {}
        SymbolStyle::Other => add_mark(symbolizer, "dot", symbol),
    }
}

/// `fill` and `fill-opacity` for an ArcGIS color.
pub fn solid_fill(color: Color) -> Fill {
    let mut fill = Fill::default();
    fill.add_css_parameter("fill", color.to_hex())
        .add_css_parameter("fill-opacity", color.opacity());
    fill
}

fn add_mark(symbolizer: &mut Symbolizer, well_known_name: &str, symbol: &impl SymbolPaint) {
    let mut mark = Mark::new(well_known_name);
    mark.fill = symbol.paint_color().map(solid_fill);
    mark.stroke = symbol.paint_outline();
    symbolizer.attach_graphic(Graphic::mark(mark).with_size(symbol.paint_size()));
}

fn dash(symbolizer: &mut Symbolizer) {
    match symbolizer.stroke_mut() {
        Some(stroke) => {
            stroke
                .add_css_parameter("stroke-linecap", "square")
                .add_css_parameter("stroke-dasharray", "4 2");
        }
        None => debug!("Dash style on a symbolizer without stroke, ignoring"),
    }
}
