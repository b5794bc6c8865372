//! ArcGIS renderer JSON (`drawingInfo.renderer`).

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::Symbol;

/// How a layer's features are assigned symbols.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Renderer {
    #[serde(rename = "simple")]
    Simple(SimpleRenderer),

    #[serde(rename = "uniqueValue")]
    UniqueValue(UniqueValueRenderer),

    #[serde(rename = "classBreaks")]
    ClassBreaks(ClassBreaksRenderer),

    /// Heatmap, dot density, vector field, ...
    #[serde(other)]
    Other,
}

/// One symbol for every feature.
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleRenderer {
    #[serde(default)]
    pub symbol: Option<Symbol>,

    #[serde(default)]
    pub label: Option<String>,
}

/// One symbol per distinct value of `field1`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueValueRenderer {
    pub field1: String,

    #[serde(default)]
    pub unique_value_infos: Vec<UniqueValueInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UniqueValueInfo {
    pub value: Value,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub symbol: Option<Symbol>,
}

impl UniqueValueInfo {
    /// The value as a filter literal.
    pub fn literal(&self) -> String {
        literal(&self.value)
    }

    /// Rule title: the label, or the value when the service gives none.
    pub fn title(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.literal())
    }
}

/// One symbol per numeric range of `field`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBreaksRenderer {
    pub field: String,

    #[serde(default)]
    pub min_value: Option<Number>,

    #[serde(default)]
    pub class_break_infos: Vec<ClassBreakInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBreakInfo {
    pub class_max_value: Number,

    /// Only present on services that publish explicit lower bounds
    #[serde(default)]
    pub class_min_value: Option<Number>,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub symbol: Option<Symbol>,
}

impl ClassBreakInfo {
    pub fn title(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.class_max_value.to_string())
    }
}

impl ClassBreaksRenderer {
    /// Lower bound of the first class.
    pub fn first_lower_bound(&self) -> Option<String> {
        self.min_value
            .as_ref()
            .or_else(|| {
                self.class_break_infos
                    .first()
                    .and_then(|info| info.class_min_value.as_ref())
            })
            .map(Number::to_string)
    }
}

/// Render a JSON scalar as filter literal text.
pub fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
