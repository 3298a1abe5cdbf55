//! # Reference Electrodes
//!
//! Tabulated reference electrode potentials and the conversion of
//! electrochemical potentials between reference scales.
//!
//! Every electrode stores literature values of its potential vs the standard
//! hydrogen electrode (SHE), exactly one of which is flagged `preferred` and
//! used for conversions. All conversions route through SHE:
//!
//! ```text
//! shift(from, to) = value_vs_she(to) - value_vs_she(from)
//! ```
//!
//! The reversible hydrogen electrode (RHE) is a virtual scale at
//! `-0.0591 V * pH` vs SHE (Nernst equation, 25 °C), so any conversion
//! touching RHE requires the pH of the electrolyte.
//!
//! ```rust
//! use echemtab::electrochemistry::{self, ReferenceElectrode};
//!
//! let reference = ReferenceElectrode::get("Ag/AgCl-sat")?;
//! let on_she = reference.shift("SHE", Some(0.55), None)?;
//! assert!((on_she - 0.353).abs() < 1e-12);
//!
//! let rhe = electrochemistry::shift("SHE", "RHE", Some(7.0))?;
//! assert!((rhe + 0.4137).abs() < 1e-12);
//! # Ok::<(), echemtab::electrochemistry::ElectrodeError>(())
//! ```

mod conversion;
mod data;
mod electrode;
mod error;
mod registry;

#[cfg(test)]
mod tests;

pub use conversion::{convert, shift, NERNST_SLOPE, RHE, SHE};
pub use electrode::{
    Approach, ElectrodeEntry, ReferenceElectrode, Source, TemperatureDependence,
};
pub use error::ElectrodeError;
pub use registry::Registry;
