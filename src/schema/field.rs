use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Cumulative additive shift already applied to a field's values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    /// Magnitude of the total shift
    pub value: f64,
    /// Unit of `value`; compatible with the owning field's unit
    pub unit: String,
}

/// Multiplicative factor already applied to a field's values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingFactor {
    /// Factor relative to the as-recorded values
    pub value: f64,
}

/// Descriptor of one table column.
///
/// Serialized with the key names of the data-package schema (`scalingFactor`
/// in camelCase). Keys this type does not model, such as `type` or an
/// `originalName` left behind by a rename, are kept in [`Field::extra`] and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Column name, unique within a table
    pub name: String,

    /// Unit of the values; `None` means dimensionless or unspecified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Reference electrode scale for potentials (e.g. `"RHE"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Cumulative offset applied by `add_offset`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,

    /// Factor applied by scan-rate rescaling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_factor: Option<ScalingFactor>,

    /// Free-text description of the column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Additional descriptor keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Field {
    /// Create a field with the given name and no unit
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Set the unit
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    /// Set the reference electrode scale
    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Factor applied so far; 1.0 when no scaling has happened
    pub fn scaling(&self) -> f64 {
        self.scaling_factor.map(|s| s.value).unwrap_or(1.0)
    }
}
