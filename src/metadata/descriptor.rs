use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::figure::{FigureDescription, FigureField, Quantity};
use super::source::Source;
use super::system::{Electrode, System};
use super::MetadataError;

/// Metadata describing one entry.
///
/// The sections the transformations read are typed; everything else is kept
/// in [`EntryMetadata::extra`] and reachable through [`EntryMetadata::get`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryMetadata {
    /// Publication and figure the data stems from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,

    /// Electrochemical system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<System>,

    /// Description of the published figure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure_description: Option<FigureDescription>,

    /// Free-form metadata (curation, experimental details, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl EntryMetadata {
    /// Create a new empty metadata container
    pub fn new() -> Self {
        Self::default()
    }

    /// Value at a dotted path such as `"system.electrolyte.ph.value"`.
    ///
    /// Array elements are addressed by index (`"system.electrodes.0.name"`).
    /// Typed and free-form sections are searched alike.
    pub fn get(&self, path: &str) -> Option<Value> {
        let root = serde_json::to_value(self).ok()?;
        let mut current = &root;
        for segment in path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current.clone())
    }

    /// Numeric value at a dotted path
    pub fn get_f64(&self, path: &str) -> Result<Option<f64>, MetadataError> {
        match self.get(path) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_f64().map(Some).ok_or_else(|| MetadataError::InvalidValue {
                path: path.to_string(),
                reason: format!("expected a number, found {}", value),
            }),
        }
    }

    /// pH of the electrolyte, if recorded
    pub fn ph(&self) -> Option<f64> {
        self.system.as_ref()?.ph()
    }

    /// Scan rate of the original measurement, if recorded
    pub fn scan_rate(&self) -> Option<&Quantity> {
        self.figure_description.as_ref()?.scan_rate.as_ref()
    }

    /// Axes of the original figure
    pub fn figure_fields(&self) -> &[FigureField] {
        self.figure_description
            .as_ref()
            .map(|d| d.fields.as_slice())
            .unwrap_or(&[])
    }

    /// Electrode of the cell by its label
    pub fn electrode(&self, name: &str) -> Option<&Electrode> {
        self.system.as_ref()?.electrode(name)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserialize from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, MetadataError> {
        Ok(serde_json::from_value(value)?)
    }
}
