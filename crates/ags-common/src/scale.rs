//! Scale visibility conversion.
//!
//! ArcGIS `minScale` is the scale beyond which a layer is hidden when zooming
//! *out*, so it bounds the largest visible denominator: it becomes SLD's
//! `MaxScaleDenominator`. `maxScale` becomes `MinScaleDenominator`. A value of
//! `0` means unbounded in ArcGIS and maps to an absent SLD element.

use serde_json::Number;

/// Scale denominators ready to be placed on an SLD rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaleBounds {
    pub min_scale_denominator: Option<String>,
    pub max_scale_denominator: Option<String>,
}

impl ScaleBounds {
    /// No scale restriction at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.min_scale_denominator.is_none() && self.max_scale_denominator.is_none()
    }
}

/// Convert ArcGIS `minScale`/`maxScale` into SLD scale denominators.
pub fn scale_bounds(min_scale: Option<&Number>, max_scale: Option<&Number>) -> ScaleBounds {
    ScaleBounds {
        min_scale_denominator: bound(max_scale),
        max_scale_denominator: bound(min_scale),
    }
}

fn bound(scale: Option<&Number>) -> Option<String> {
    let scale = scale?;
    if scale.as_f64() == Some(0.0) {
        None
    } else {
        Some(scale.to_string())
    }
}
