//! ArcGIS color arrays and their SLD string forms.
//!
//! ArcGIS encodes every color as a `[r, g, b, a]` array with components in
//! `0..=255`. SLD splits that into a `#rrggbb` color and a separate opacity.

use serde::{Deserialize, Serialize};

/// An ArcGIS RGBA color quadruple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub fn alpha(&self) -> u8 {
        self.0[3]
    }

    /// Lowercase `#rrggbb`; alpha is dropped.
    pub fn to_hex(&self) -> String {
        color_to_hex(self.0)
    }

    /// `alpha / 255` rendered as a decimal string.
    pub fn opacity(&self) -> String {
        opacity_of(self.0)
    }
}

/// Convert an RGBA quadruple into a `#rrggbb` hex string, ignoring alpha.
pub fn color_to_hex(rgba: [u8; 4]) -> String {
    let [r, g, b, _] = rgba;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Opacity of an RGBA quadruple as `a / 255`.
pub fn opacity_of(rgba: [u8; 4]) -> String {
    (f64::from(rgba[3]) / 255.0).to_string()
}
