//! Renderer dispatch: one ArcGIS renderer becomes one or more SLD rules.

use sld::{ComparisonOperator, FeatureTypeStyle, Filter, Rule, SymbolizerKind};
use tracing::debug;

use ags_common::{
    AgsResult, ClassBreaksRenderer, GeometryType, Renderer, SimpleRenderer, Symbol, UniqueValueRenderer,
};

use crate::symbol::convert_symbol;
use crate::LayerContext;

/// Append the rules for the layer's renderer to `fts`.
///
/// Renderer types without a dedicated handler, and layers without a renderer,
/// fall back to a geometry-based default rule.
pub fn dispatch(ctx: &LayerContext, fts: &mut FeatureTypeStyle) -> AgsResult<()> {
    match ctx.descriptor.renderer() {
        Some(Renderer::Simple(renderer)) => render_simple(ctx, fts, renderer),
        Some(Renderer::UniqueValue(renderer)) => render_unique_value(ctx, fts, renderer),
        Some(Renderer::ClassBreaks(renderer)) => render_class_breaks(ctx, fts, renderer),
        Some(Renderer::Other) | None => {
            render_default(ctx, fts);
            Ok(())
        }
    }
}

/// One rule named after the layer.
fn render_simple(ctx: &LayerContext, fts: &mut FeatureTypeStyle, renderer: &SimpleRenderer) -> AgsResult<()> {
    let rule = scaled_rule(ctx, fts, ctx.name.clone());
    apply_symbol(ctx, rule, renderer.symbol.as_ref())
}

/// One rule per value, filtered with `field1 == value`, in input order.
fn render_unique_value(
    ctx: &LayerContext,
    fts: &mut FeatureTypeStyle,
    renderer: &UniqueValueRenderer,
) -> AgsResult<()> {
    for info in &renderer.unique_value_infos {
        let rule = scaled_rule(ctx, fts, info.title());
        rule.set_filter(Filter::equal_to(renderer.field1.as_str(), info.literal()));
        apply_symbol(ctx, rule, info.symbol.as_ref())?;
    }
    Ok(())
}

/// One rule per break, filtered with `running_min <= field <= classMaxValue`.
///
/// Each break's upper value becomes the next break's lower value, so a
/// feature sitting exactly on a breakpoint matches both neighbouring rules.
fn render_class_breaks(
    ctx: &LayerContext,
    fts: &mut FeatureTypeStyle,
    renderer: &ClassBreaksRenderer,
) -> AgsResult<()> {
    let field = renderer.field.as_str();
    let mut running_min = renderer.first_lower_bound();

    for info in &renderer.class_break_infos {
        let max = info.class_max_value.to_string();
        let filter = match running_min.take() {
            Some(min) => Filter::between_inclusive(field, min, max.clone()),
            None => Filter::compare(ComparisonOperator::LessThanOrEqualTo, field, max.clone()),
        };

        let rule = scaled_rule(ctx, fts, info.title());
        rule.set_filter(filter);
        apply_symbol(ctx, rule, info.symbol.as_ref())?;

        running_min = Some(max);
    }
    Ok(())
}

/// A bare symbolizer matching the geometry type; nothing for other geometries.
fn render_default(ctx: &LayerContext, fts: &mut FeatureTypeStyle) {
    let kind = match ctx.geometry_type() {
        Some(GeometryType::Point) => SymbolizerKind::Point,
        Some(GeometryType::Polyline) => SymbolizerKind::Line,
        Some(GeometryType::Polygon) => SymbolizerKind::Polygon,
        other => {
            debug!(layer = %ctx.name, geometry = ?other, "No default rule for geometry type");
            return;
        }
    };

    let bounds = &ctx.scale_bounds;
    fts.create_rule_with(ctx.name.clone(), kind).set_scale_denominators(
        bounds.min_scale_denominator.clone(),
        bounds.max_scale_denominator.clone(),
    );
}

/// A new rule with the layer's scale bounds and no symbolizer.
fn scaled_rule<'a>(ctx: &LayerContext, fts: &'a mut FeatureTypeStyle, title: String) -> &'a mut Rule {
    let bounds = &ctx.scale_bounds;
    let rule = fts.create_rule(title);
    rule.clear_symbolizer().set_scale_denominators(
        bounds.min_scale_denominator.clone(),
        bounds.max_scale_denominator.clone(),
    );
    rule
}

fn apply_symbol(ctx: &LayerContext, rule: &mut Rule, symbol: Option<&Symbol>) -> AgsResult<()> {
    match symbol {
        Some(symbol) => convert_symbol(ctx, rule, symbol),
        None => {
            debug!(rule = %rule.title, "Renderer entry without symbol");
            Ok(())
        }
    }
}
