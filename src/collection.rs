//! # Collections
//!
//! An ordered set of [`Entry`] values, e.g. every package in a directory,
//! with a map operation that applies one transformation to all of them.
//!
//! With the `parallel` feature, [`Collection::try_map`] distributes entries
//! over the rayon thread pool. Entries share no mutable state, so the
//! result is the same either way.

use std::path::Path;

use log::info;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::entry::Entry;
use crate::package::{self, PackageError};

/// Ordered set of entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    /// Create a collection from entries
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Load every `*.json` package descriptor in `dir`, sorted by file name
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, PackageError> {
        let dir = dir.as_ref();
        let mut paths = Vec::new();
        for item in std::fs::read_dir(dir)? {
            let path = item?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let entries = paths
            .iter()
            .map(package::read_entry)
            .collect::<Result<Vec<_>, _>>()?;
        info!("Loaded {} entries from {}", entries.len(), dir.display());
        Ok(Self::new(entries))
    }

    /// Entry with the given identifier
    pub fn get(&self, identifier: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.identifier() == identifier)
    }

    /// Iterate over the entries in order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the collection holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply `f` to every entry, keeping the order.
    ///
    /// Fails with the first error encountered; no partial collection is
    /// returned.
    #[cfg(not(feature = "parallel"))]
    pub fn try_map<F, E>(&self, f: F) -> Result<Collection, E>
    where
        F: Fn(&Entry) -> Result<Entry, E>,
    {
        let entries = self.entries.iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(Self::new(entries))
    }

    /// Apply `f` to every entry in parallel, keeping the order.
    ///
    /// Fails with an error of one of the failing entries; no partial
    /// collection is returned.
    #[cfg(feature = "parallel")]
    pub fn try_map<F, E>(&self, f: F) -> Result<Collection, E>
    where
        F: Fn(&Entry) -> Result<Entry, E> + Sync + Send,
        E: Send,
    {
        let entries = self
            .entries
            .par_iter()
            .map(f)
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Self::new(entries))
    }

    /// Write every entry as a package into `dir`
    pub fn write_all<P: AsRef<Path>>(&self, dir: P, suffix: &str) -> Result<(), PackageError> {
        let dir = dir.as_ref();
        for entry in &self.entries {
            let basename = format!("{}{}", entry.identifier(), suffix);
            package::write_entry(entry, dir, &basename)?;
        }
        Ok(())
    }
}

impl IntoIterator for Collection {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<Entry> for Collection {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
