use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::data::reference_electrodes;
use super::{ElectrodeError, ReferenceElectrode};

static GLOBAL: Lazy<Registry> = Lazy::new(|| Registry::new(reference_electrodes()));

/// Read-only set of reference electrodes keyed by name.
///
/// The process-wide instance is built on first use and never written
/// afterwards, so it can be shared across threads freely. Custom registries
/// can be built with [`Registry::new`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    electrodes: BTreeMap<String, ReferenceElectrode>,
    aliases: BTreeMap<String, String>,
}

impl Registry {
    /// Build a registry from electrode records
    pub fn new(electrodes: Vec<ReferenceElectrode>) -> Self {
        let mut registry = Self::default();
        for electrode in electrodes {
            if let Some(alias) = &electrode.alias {
                registry
                    .aliases
                    .insert(alias.clone(), electrode.name.clone());
            }
            registry
                .electrodes
                .insert(electrode.name.clone(), electrode);
        }
        registry
    }

    /// The process-wide registry with the tabulated literature values
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Electrode by name or alias
    pub fn get(&self, name: &str) -> Result<&ReferenceElectrode, ElectrodeError> {
        let key = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        self.electrodes
            .get(key)
            .ok_or_else(|| ElectrodeError::UnknownElectrode(name.to_string()))
    }

    /// Registered electrode names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.electrodes.keys().map(String::as_str).collect()
    }

    /// Iterate over all electrodes in name order
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceElectrode> {
        self.electrodes.values()
    }

    /// Number of registered electrodes
    pub fn len(&self) -> usize {
        self.electrodes.len()
    }

    /// True when the registry holds no electrodes
    pub fn is_empty(&self) -> bool {
        self.electrodes.is_empty()
    }
}
