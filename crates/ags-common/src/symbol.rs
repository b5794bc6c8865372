//! ArcGIS symbol JSON.
//!
//! Symbols are tagged by their `type` string. Types and styles that have no
//! SLD counterpart deserialize into a catch-all variant instead of failing, so
//! every lookup on them has a guaranteed fallback.

use serde::Deserialize;
use serde_json::Number;

use crate::Color;

/// A symbol attached to a renderer or a labeling rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Symbol {
    #[serde(rename = "esriPMS")]
    PictureMarker(PictureMarkerSymbol),

    #[serde(rename = "esriSFS")]
    SimpleFill(SimpleFillSymbol),

    #[serde(rename = "esriSLS")]
    SimpleLine(LineSymbol),

    #[serde(rename = "esriSMS")]
    SimpleMarker(MarkerSymbol),

    #[serde(rename = "esriTS")]
    Text(TextSymbol),

    /// Any other symbol type (esriPFS, CIM symbols, ...)
    #[serde(other)]
    Unsupported,
}

impl Symbol {
    /// The ArcGIS type string, for log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Symbol::PictureMarker(_) => "esriPMS",
            Symbol::SimpleFill(_) => "esriSFS",
            Symbol::SimpleLine(_) => "esriSLS",
            Symbol::SimpleMarker(_) => "esriSMS",
            Symbol::Text(_) => "esriTS",
            Symbol::Unsupported => "unsupported",
        }
    }
}

/// The `style` enumerant shared by marker, line and fill symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SymbolStyle {
    #[serde(rename = "esriSMSCircle")]
    MarkerCircle,

    #[serde(rename = "esriSMSSquare")]
    MarkerSquare,

    #[serde(rename = "esriSMSCross")]
    MarkerCross,

    #[serde(rename = "esriSMSX")]
    MarkerX,

    #[serde(rename = "esriSMSTriangle")]
    MarkerTriangle,

    #[serde(rename = "esriSLSSolid")]
    LineSolid,

    #[serde(rename = "esriSLSDash")]
    LineDash,

    #[serde(rename = "esriSFSSolid")]
    FillSolid,

    #[serde(rename = "esriSFSNull")]
    FillNull,

    #[serde(other)]
    Other,
}

/// Picture marker (`esriPMS`): an embedded base64 raster.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureMarkerSymbol {
    #[serde(default)]
    pub url: Option<String>,

    /// Base64 encoded image bytes
    #[serde(default)]
    pub image_data: Option<String>,

    /// MIME type of `image_data`, e.g. `image/png`
    #[serde(default)]
    pub content_type: Option<String>,

    #[serde(default)]
    pub width: Option<Number>,

    #[serde(default)]
    pub height: Option<Number>,

    #[serde(default)]
    pub angle: Option<Number>,
}

/// Line sub-symbol used as a fill or marker outline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Outline {
    #[serde(default)]
    pub color: Option<Color>,

    #[serde(default)]
    pub width: Option<Number>,

    #[serde(default)]
    pub style: Option<SymbolStyle>,
}

/// Simple fill (`esriSFS`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimpleFillSymbol {
    #[serde(default)]
    pub color: Option<Color>,

    #[serde(default)]
    pub outline: Option<Outline>,

    #[serde(default)]
    pub style: Option<SymbolStyle>,
}

/// Simple line (`esriSLS`).
///
/// Most services put color/width/style on the symbol itself; some nest them
/// in an `outline` instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineSymbol {
    #[serde(default)]
    pub color: Option<Color>,

    #[serde(default)]
    pub width: Option<Number>,

    #[serde(default)]
    pub style: Option<SymbolStyle>,

    #[serde(default)]
    pub outline: Option<Outline>,
}

impl LineSymbol {
    /// Resolve the effective stroke, preferring the nested outline.
    pub fn stroke(&self) -> Outline {
        match &self.outline {
            Some(outline) => outline.clone(),
            None => Outline {
                color: self.color,
                width: self.width.clone(),
                style: self.style,
            },
        }
    }
}

/// Simple marker (`esriSMS`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkerSymbol {
    #[serde(default)]
    pub color: Option<Color>,

    #[serde(default)]
    pub size: Option<Number>,

    #[serde(default)]
    pub angle: Option<Number>,

    #[serde(default)]
    pub style: Option<SymbolStyle>,

    #[serde(default)]
    pub outline: Option<Outline>,
}

/// Text symbol (`esriTS`), only found in labeling rules.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSymbol {
    #[serde(default)]
    pub color: Option<Color>,

    #[serde(default)]
    pub halo_color: Option<Color>,

    #[serde(default)]
    pub halo_size: Option<Number>,

    #[serde(default)]
    pub horizontal_alignment: Option<String>,

    #[serde(default)]
    pub vertical_alignment: Option<String>,

    #[serde(default)]
    pub font: Option<Font>,
}

impl TextSymbol {
    /// Halo size when set and non-zero.
    pub fn halo(&self) -> Option<&Number> {
        self.halo_size.as_ref().filter(|size| size.as_f64() != Some(0.0))
    }
}

/// Font descriptor of a text symbol.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Font {
    #[serde(default)]
    pub family: Option<String>,

    #[serde(default)]
    pub size: Option<Number>,

    #[serde(default)]
    pub style: Option<String>,

    #[serde(default)]
    pub weight: Option<String>,

    #[serde(default)]
    pub decoration: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fill_symbol() {
        let json = r#"{
            "type": "esriSFS",
            "style": "esriSFSSolid",
            "color": [115, 178, 255, 255],
            "outline": {"type": "esriSLS", "style": "esriSLSSolid", "color": [110, 110, 110, 255], "width": 0.4}
        }"#;

        match serde_json::from_str::<Symbol>(json).unwrap() {
            Symbol::SimpleFill(fill) => {
                assert_eq!(fill.style, Some(SymbolStyle::FillSolid));
                assert_eq!(fill.color, Some(Color::new(115, 178, 255, 255)));
                let outline = fill.outline.unwrap();
                assert_eq!(outline.width.unwrap().to_string(), "0.4");
            }
            other => panic!("Expected esriSFS, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_symbol_type_is_unsupported() {
        let json = r#"{"type": "esriPFS", "url": "abc", "width": 12}"#;
        let symbol: Symbol = serde_json::from_str(json).unwrap();
        assert!(matches!(symbol, Symbol::Unsupported));
        assert_eq!(symbol.type_name(), "unsupported");
    }

    #[test]
    fn test_unknown_style_is_other() {
        let json = r#"{"type": "esriSMS", "style": "esriSMSDiamond", "size": 8}"#;
        match serde_json::from_str::<Symbol>(json).unwrap() {
            Symbol::SimpleMarker(marker) => assert_eq!(marker.style, Some(SymbolStyle::Other)),
            other => panic!("Expected esriSMS, got {:?}", other),
        }
    }

    #[test]
    fn test_line_stroke_prefers_outline() {
        let nested: LineSymbol = serde_json::from_str(
            r#"{"color": [1, 1, 1, 255], "width": 1, "outline": {"color": [2, 2, 2, 255], "width": 3, "style": "esriSLSDash"}}"#,
        )
        .unwrap();
        let stroke = nested.stroke();
        assert_eq!(stroke.color, Some(Color::new(2, 2, 2, 255)));
        assert_eq!(stroke.style, Some(SymbolStyle::LineDash));

        let flat: LineSymbol =
            serde_json::from_str(r#"{"color": [1, 1, 1, 255], "width": 1.5, "style": "esriSLSSolid"}"#).unwrap();
        let stroke = flat.stroke();
        assert_eq!(stroke.width.unwrap().to_string(), "1.5");
        assert_eq!(stroke.style, Some(SymbolStyle::LineSolid));
    }

    #[test]
    fn test_zero_halo_is_ignored() {
        let text: TextSymbol = serde_json::from_str(r#"{"haloSize": 0}"#).unwrap();
        assert!(text.halo().is_none());
        let text: TextSymbol = serde_json::from_str(r#"{"haloSize": 2}"#).unwrap();
        assert_eq!(text.halo().unwrap().to_string(), "2");
    }
}
