use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Provenance of the data: publication and figure it was digitized from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Key of the entry in `bibdata`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_key: Option<String>,

    /// Link to the publication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Figure label in the publication, e.g. `"1a"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure: Option<String>,

    /// Curve label within the figure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,

    /// Raw BibTeX of the publication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bibdata: Option<String>,

    /// Additional keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Source {
    /// Short label such as `"Fig. 1a: solid"`, if figure and curve are known
    pub fn figure_label(&self) -> Option<String> {
        match (&self.figure, &self.curve) {
            (Some(figure), Some(curve)) => Some(format!("Fig. {}: {}", figure, curve)),
            _ => None,
        }
    }
}
