use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Electrochemical system: electrolyte and electrodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct System {
    /// Electrolyte description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electrolyte: Option<Electrolyte>,

    /// Electrodes of the cell (working, counter, reference, ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub electrodes: Vec<Electrode>,

    /// Additional keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Electrolyte of the cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Electrolyte {
    /// pH of the electrolyte
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<Ph>,

    /// Additional keys (type, components, temperature, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A pH value with optional uncertainty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ph {
    /// pH
    pub value: f64,
    /// Reported uncertainty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<f64>,
}

/// One electrode of the cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Electrode {
    /// Label used in the cell, e.g. `"WE"`, `"REF"`
    pub name: String,

    /// Role of the electrode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Electrode material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    /// Additional keys (shape, crystallographic orientation, supplier, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl System {
    /// pH of the electrolyte, if recorded
    pub fn ph(&self) -> Option<f64> {
        self.electrolyte.as_ref()?.ph.map(|ph| ph.value)
    }

    /// Electrode by its cell label
    pub fn electrode(&self, name: &str) -> Option<&Electrode> {
        self.electrodes.iter().find(|e| e.name == name)
    }
}
