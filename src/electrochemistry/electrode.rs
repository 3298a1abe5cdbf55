use serde::{Deserialize, Serialize};

use super::{ElectrodeError, Registry};

/// How a literature value was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Approach {
    /// Derived from thermodynamic data or a definition
    Theoretical,
    /// Measured
    Experimental,
    /// Computed from other measured quantities
    Calculated,
    /// A conventional value without experimental or theoretical backing
    Generic,
    /// Not reported
    #[default]
    Unknown,
}

/// Where a literature value comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    /// Free-text citation or URL
    Text(String),
    /// Structured bibliographic reference
    Reference {
        /// DOI link
        #[serde(default, skip_serializing_if = "Option::is_none")]
        doi: Option<String>,
        /// Title of the work
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// ISBN of a book
        #[serde(default, skip_serializing_if = "Option::is_none")]
        isbn: Option<String>,
    },
}

impl Source {
    /// Free-text source
    pub fn text(text: &str) -> Self {
        Source::Text(text.to_string())
    }

    /// Source identified by a DOI
    pub fn doi(doi: &str) -> Self {
        Source::Reference {
            doi: Some(doi.to_string()),
            title: None,
            isbn: None,
        }
    }

    /// Source identified by an ISBN
    pub fn isbn(isbn: &str) -> Self {
        Source::Reference {
            doi: None,
            title: None,
            isbn: Some(isbn.to_string()),
        }
    }
}

/// One literature value for the potential of an electrode vs SHE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectrodeEntry {
    /// Potential in `unit` vs the `vs` scale
    pub value: f64,
    /// Unit of `value`
    pub unit: String,
    /// Scale the value is reported against
    pub vs: String,
    /// How the value was obtained
    pub approach: Approach,
    /// Whether this is the authoritative entry used for conversions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,
    /// Provenance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Why this value was chosen as preferred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<String>,
    /// Reported uncertainty in `unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<f64>,
}

impl ElectrodeEntry {
    /// A value in volts vs SHE
    pub fn volts_vs_she(value: f64, approach: Approach) -> Self {
        Self {
            value,
            unit: "V".to_string(),
            vs: "SHE".to_string(),
            approach,
            preferred: None,
            source: None,
            choice: None,
            uncertainty: None,
        }
    }

    /// Flag this entry as the preferred one
    pub fn preferred(mut self) -> Self {
        self.preferred = Some(true);
        self
    }

    /// Attach a source
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Attach the reason for choosing this value
    pub fn with_choice(mut self, choice: &str) -> Self {
        self.choice = Some(choice.to_string());
        self
    }

    /// Attach an uncertainty
    pub fn with_uncertainty(mut self, uncertainty: f64) -> Self {
        self.uncertainty = Some(uncertainty);
        self
    }

    /// Whether the entry is flagged as preferred
    pub fn is_preferred(&self) -> bool {
        self.preferred == Some(true)
    }
}

/// Empirical temperature dependence of an electrode potential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureDependence {
    /// Formula as published
    pub formula: String,
    /// Units and validity range
    pub comment: String,
    /// Source of the formula
    pub doi: String,
}

/// A named reference electrode with its literature values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceElectrode {
    /// Registry key, e.g. `"Ag/AgCl-sat"`
    pub name: String,
    /// Descriptive name
    pub full_name: String,
    /// Alternative common name, e.g. `"SCE"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Literature values
    pub entries: Vec<ElectrodeEntry>,
    /// Temperature dependence, where known
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub temperature_dependence: Vec<TemperatureDependence>,
}

impl ReferenceElectrode {
    /// Create an electrode without entries
    pub fn new(name: &str, full_name: &str) -> Self {
        Self {
            name: name.to_string(),
            full_name: full_name.to_string(),
            alias: None,
            entries: Vec::new(),
            temperature_dependence: Vec::new(),
        }
    }

    /// Look up an electrode in the process-wide registry
    pub fn get(name: &str) -> Result<&'static ReferenceElectrode, ElectrodeError> {
        Registry::global().get(name)
    }

    /// Set the alias
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// Append a literature entry
    pub fn with_entry(mut self, entry: ElectrodeEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append a temperature dependence record
    pub fn with_temperature_dependence(mut self, dependence: TemperatureDependence) -> Self {
        self.temperature_dependence.push(dependence);
        self
    }

    /// The single entry flagged as preferred.
    ///
    /// Fails with [`ElectrodeError::AmbiguousPreferred`] when zero or more
    /// than one entry carries the flag; the first match is never picked.
    pub fn preferred_entry(&self) -> Result<&ElectrodeEntry, ElectrodeError> {
        let mut preferred = self.entries.iter().filter(|e| e.is_preferred());
        match (preferred.next(), preferred.next()) {
            (Some(entry), None) => Ok(entry),
            _ => Err(ElectrodeError::AmbiguousPreferred {
                name: self.name.clone(),
                count: self.entries.iter().filter(|e| e.is_preferred()).count(),
            }),
        }
    }

    /// Preferred potential in V vs SHE
    pub fn preferred_value(&self) -> Result<f64, ElectrodeError> {
        Ok(self.preferred_entry()?.value)
    }

    /// Shift from this electrode's scale to `to`.
    ///
    /// Without `potential` the shift itself is returned; with it, the
    /// potential re-expressed on the `to` scale. `ph` is needed whenever
    /// `RHE` is one of the two scales.
    ///
    /// Both scales are looked up in [`Registry::global`]. Electrodes of a
    /// registry built with [`Registry::new`] convert through
    /// [`Registry::shift`] on that registry instead.
    pub fn shift(
        &self,
        to: &str,
        potential: Option<f64>,
        ph: Option<f64>,
    ) -> Result<f64, ElectrodeError> {
        let shift = Registry::global().shift(&self.name, to, ph)?;
        Ok(potential.map(|p| p + shift).unwrap_or(shift))
    }

    /// JSON representation of the electrode record
    pub fn to_json(&self) -> Result<String, ElectrodeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
