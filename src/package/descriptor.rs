use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::schema::Field;

/// Key under `resource.metadata` holding the entry metadata
pub const METADATA_KEY: &str = "echemdb";

/// Top level of a `<basename>.json` descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Data resources; an entry package holds exactly one
    pub resources: Vec<Resource>,

    /// Other package-level keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One tabular resource of a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource name, used as entry identifier
    pub name: String,

    /// CSV file relative to the descriptor
    pub path: String,

    /// Column descriptors
    pub schema: ResourceSchema,

    /// Metadata sections keyed by namespace
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,

    /// Other resource keys (`format`, `mediatype`, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Table schema of a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSchema {
    /// Field descriptors in column order
    pub fields: Vec<Field>,

    /// Other schema keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
