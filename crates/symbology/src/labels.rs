//! Labeling rules from `drawingInfo.labelingInfo`.

use sld::FeatureTypeStyle;
use tracing::debug;

use ags_common::naming::label_property;
use ags_common::{LabelingInfo, Symbol};

use crate::symbol::convert_text;

/// Title of every labeling rule.
pub const LABELS_TITLE: &str = "Labels";

/// Append one "Labels" rule per labeling class.
///
/// Only text symbols produce a symbolizer; any other symbol leaves the rule
/// empty.
pub fn add_label_rules(fts: &mut FeatureTypeStyle, labeling: &[LabelingInfo]) {
    for info in labeling {
        let bounds = info.scale_bounds();
        let rule = fts.create_rule(LABELS_TITLE);
        rule.clear_symbolizer()
            .set_scale_denominators(bounds.min_scale_denominator, bounds.max_scale_denominator);

        let property = label_property(info.label_expression.as_deref().unwrap_or_default());
        match &info.symbol {
            Some(Symbol::Text(text)) => {
                convert_text(rule, &property, info.label_placement.as_deref(), text)
            }
            other => debug!(
                symbol_type = other.as_ref().map_or("none", Symbol::type_name),
                "Labeling class without text symbol"
            ),
        }
    }
}
