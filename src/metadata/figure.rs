use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A magnitude with a unit, such as a scan rate of `50 mV / s`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Magnitude
    pub value: f64,
    /// Unit string
    pub unit: String,
}

impl Quantity {
    /// Create a quantity
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
        }
    }
}

/// Axis of the originally published figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureField {
    /// Field name
    pub name: String,
    /// Unit used in the publication
    pub unit: String,
    /// Reference scale used in the publication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Orientation of the axis in the figure (`"x"`, `"y"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
}

/// Description of the published figure the data was taken from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureDescription {
    /// Scan rate at which the voltammogram was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_rate: Option<Quantity>,

    /// Axes of the original figure
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FigureField>,

    /// Additional keys (type, measurement type, comment, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
