//! # echemtab - Quantity-Safe Electrochemistry Tables
//!
//! `echemtab` transforms tabulated electrochemical measurements (cyclic
//! voltammograms and similar curves) while keeping the physical meaning of
//! every column intact. Each column carries a unit and, for potentials, the
//! reference electrode it was measured against; every transformation updates
//! those annotations together with the values.
//!
//! ## Key Features
//!
//! - **Unit Rescaling**: Express any column in a compatible unit
//!   (`A / m2` to `uA / cm2`, `V` to `mV`). Incompatible units are rejected.
//!
//! - **Cumulative Offsets**: Shift a column and record the total shift applied
//!   so far in the field's `offset` annotation.
//!
//! - **Reference Electrode Scales**: Convert potentials between SHE, RHE,
//!   Ag/AgCl, calomel, Hg/HgO and mercury sulfate electrodes, with the
//!   pH-dependent RHE scale handled through the Nernst slope.
//!
//! - **Scan-Rate Normalization**: Scale currents to a common scan rate while
//!   tracking the factor relative to the recorded data.
//!
//! - **Literature Provenance**: Every reference potential lists its sources;
//!   exactly one value per electrode is marked as preferred.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use echemtab::package;
//!
//! let entry = package::read_entry("data/alves_2011_electrochemistry_6010_f1a_solid.json")?;
//!
//! let rescaled = entry
//!     .rescale([("E", "mV"), ("j", "uA / cm2")])?
//!     .rescale_reference(None, "RHE", Some(13.0))?;
//!
//! package::write_entry(&rescaled, "out", "alves_2011_rhe")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Reference Electrodes
//!
//! ```rust
//! use echemtab::electrochemistry::{self, ReferenceElectrode};
//!
//! let electrode = ReferenceElectrode::get("Ag/AgCl-sat")?;
//! assert!((electrode.shift("SHE", Some(0.55), None)? - 0.353).abs() < 1e-12);
//!
//! let to_rhe = electrochemistry::shift("SHE", "RHE", Some(7.0))?;
//! assert!((to_rhe + 0.4137).abs() < 1e-12);
//! # Ok::<(), echemtab::electrochemistry::ElectrodeError>(())
//! ```
//!
//! ## Package Layout
//!
//! Entries are stored as a JSON descriptor next to a CSV file:
//! ```text
//! data/
//! ├── <basename>.json   # field schema + entry metadata
//! └── <basename>.csv    # header row, then one row per data point
//! ```
//!
//! ## Modules
//!
//! - [`units`]: unit parsing and conversion factors
//! - [`schema`]: fields, annotations and the column table
//! - [`metadata`]: typed entry metadata with dotted-path access
//! - [`electrochemistry`]: reference electrode registry and scale conversion
//! - [`entry`]: the transformations
//! - [`collection`]: applying a transformation to many entries
//! - [`package`]: reading and writing packages

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
// Allow some patterns common in scientific code
#![allow(clippy::too_many_arguments)]

pub mod collection;
pub mod electrochemistry;
pub mod entry;
pub mod metadata;
pub mod package;
pub mod schema;
pub mod units;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::collection::Collection;
    pub use crate::electrochemistry::{ElectrodeError, ReferenceElectrode, Registry};
    pub use crate::entry::{Entry, EntryError};
    pub use crate::metadata::{EntryMetadata, MetadataError};
    pub use crate::package::{read_entry, write_entry, PackageError};
    pub use crate::schema::{columns, Field, Offset, ScalingFactor, SchemaError, Table};
    pub use crate::units::{Unit, UnitError};
}
