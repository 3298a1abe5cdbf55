//! # Entry Metadata
//!
//! Typed access to the descriptor that accompanies every table: where the
//! data comes from, which electrochemical system it was measured in, and how
//! the original figure was set up.
//!
//! ## Sections
//!
//! 1. **Source**: publication, figure and curve the data was digitized from
//!
//! 2. **System**: electrolyte (including its pH) and the electrodes of the cell
//!
//! 3. **Figure Description**: scan rate and the axes (with units) of the
//!    published figure
//!
//! Anything else in the descriptor is kept as free-form JSON and can be read
//! with [`EntryMetadata::get`] using a dotted path.

mod descriptor;
mod error;
mod figure;
mod source;
mod system;


pub use descriptor::EntryMetadata;
pub use error::MetadataError;
pub use figure::{FigureDescription, FigureField, Quantity};
pub use source::Source;
pub use system::{Electrode, Electrolyte, Ph, System};
