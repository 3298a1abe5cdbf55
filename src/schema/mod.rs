//! # Table Schema
//!
//! The column model every transformation operates on: a [`Table`] is an
//! ordered list of numeric columns, and each column is described by a
//! [`Field`] carrying its name, unit and provenance annotations.
//!
//! ## Field Annotations
//!
//! | Key | Type | Description |
//! |-----|------|-------------|
//! | name | string | Unique column name |
//! | unit | string (optional) | Unit of the values, e.g. `"V"` or `"A / m2"` |
//! | reference | string (optional) | Reference electrode scale of a potential |
//! | offset | `{value, unit}` (optional) | Total additive shift applied so far |
//! | scalingFactor | `{value}` (optional) | Multiplicative factor applied so far |
//! | description | string (optional) | Free text |
//!
//! Any other key in a field descriptor is preserved verbatim.

/// Canonical column names of cyclic voltammograms.
pub mod columns;
mod field;
mod table;
mod validation;

#[cfg(test)]
mod tests;

pub use columns::*;
pub use field::{Field, Offset, ScalingFactor};
pub use table::Table;
pub use validation::SchemaError;
