//! # Entries
//!
//! An [`Entry`] pairs a [`Table`] with its [`EntryMetadata`] and offers the
//! quantity-safe transformations on it:
//!
//! - [`Entry::rescale`]: express fields in other units
//! - [`Entry::add_offset`]: shift a field, keeping track of the total offset
//! - [`Entry::rescale_reference`]: move potentials to another reference scale
//! - [`Entry::rescale_scan_rate`]: normalize currents to another scan rate
//!
//! Every transformation borrows the entry and returns a new one; the input
//! is never modified, and a failing transformation returns an error instead
//! of a partially updated entry.
//!
//! ```rust
//! use echemtab::entry::Entry;
//! use echemtab::metadata::EntryMetadata;
//! use echemtab::schema::{Field, Table};
//!
//! let table = Table::from_pairs(vec![
//!     (Field::new("E").with_unit("V").with_reference("Ag/AgCl-sat"), vec![0.55]),
//!     (Field::new("j").with_unit("A / m2"), vec![1.0]),
//! ])?;
//! let entry = Entry::new("example", EntryMetadata::new(), table);
//!
//! let rescaled = entry
//!     .rescale([("j", "uA / cm2")])?
//!     .rescale_reference(None, "SHE", None)?;
//!
//! assert!((rescaled.column("j")?[0] - 100.0).abs() < 1e-9);
//! assert!((rescaled.column("E")?[0] - 0.353).abs() < 1e-9);
//! # Ok::<(), echemtab::entry::EntryError>(())
//! ```

mod columns;
mod error;
mod offset;
mod reference;
mod rescale;
mod scan_rate;


use std::fmt;

pub use error::EntryError;

use crate::metadata::{Electrode, EntryMetadata};
use crate::schema::{self, Field, SchemaError, Table};

/// A table of measurements together with its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    identifier: String,
    metadata: EntryMetadata,
    table: Table,
}

impl Entry {
    /// Create an entry
    pub fn new(identifier: &str, metadata: EntryMetadata, table: Table) -> Self {
        Self {
            identifier: identifier.to_string(),
            metadata,
            table,
        }
    }

    /// Identifier of the entry (the package basename)
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Metadata of the entry
    pub fn metadata(&self) -> &EntryMetadata {
        &self.metadata
    }

    /// Measured values
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Field descriptor by name
    pub fn field(&self, name: &str) -> Result<&Field, EntryError> {
        Ok(self.table.field(name)?)
    }

    /// Column values by name
    pub fn column(&self, name: &str) -> Result<&[f64], EntryError> {
        Ok(self.table.column(name)?)
    }

    /// Unit of the named field
    pub fn field_unit(&self, name: &str) -> Result<Option<&str>, EntryError> {
        Ok(self.field(name)?.unit.as_deref())
    }

    /// Electrode of the measurement cell by its label, e.g. `"WE"`
    pub fn get_electrode(&self, name: &str) -> Result<&Electrode, EntryError> {
        self.metadata
            .electrode(name)
            .ok_or_else(|| EntryError::ElectrodeNotFound(name.to_string()))
    }

    /// Name of an existing field for `name`.
    ///
    /// A current density `j` that is not present resolves to the absolute
    /// current `I`.
    pub fn resolve_field_name<'a>(&'a self, name: &'a str) -> Result<&'a str, EntryError> {
        if self.table.contains(name) {
            return Ok(name);
        }
        if name == schema::CURRENT_DENSITY && self.table.contains(schema::CURRENT) {
            return Ok(schema::CURRENT);
        }
        Err(SchemaError::FieldNotFound(name.to_string()).into())
    }

    /// The explicitly requested field, or the first of `fallbacks` present
    pub(crate) fn field_or_default<'a>(
        &'a self,
        requested: Option<&'a str>,
        fallbacks: &'static [&'static str],
    ) -> Result<&'a str, EntryError> {
        if let Some(name) = requested {
            return self.resolve_field_name(name);
        }
        fallbacks
            .iter()
            .copied()
            .find(|name| self.table.contains(name))
            .ok_or_else(|| SchemaError::FieldNotFound(fallbacks.join(" or ")).into())
    }

    /// Same identifier and metadata with a different table
    pub(crate) fn with_table(&self, table: Table) -> Self {
        Self {
            identifier: self.identifier.clone(),
            metadata: self.metadata.clone(),
            table,
        }
    }

    /// Split into identifier, metadata and table
    pub fn into_parts(self) -> (String, EntryMetadata, Table) {
        (self.identifier, self.metadata, self.table)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({:?})", self.identifier)
    }
}
