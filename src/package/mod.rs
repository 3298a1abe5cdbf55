//! # Data Packages
//!
//! Reading and writing entries in the "JSON descriptor + CSV values" layout:
//!
//! ```text
//! <basename>.json   descriptor with field schema and entry metadata
//! <basename>.csv    one header row with the field names, then values
//! ```
//!
//! The descriptor carries a single resource:
//!
//! ```json
//! { "resources": [ { "name": "<basename>", "path": "<basename>.csv",
//!                    "schema": { "fields": [ ... ] },
//!                    "metadata": { "echemdb": { ... } } } ] }
//! ```
//!
//! Field annotations (`unit`, `reference`, `offset`, `scalingFactor`)
//! survive a write/read cycle unchanged. The CSV is read as is: comma
//! delimited, `.` as decimal separator, no sniffing.

mod descriptor;
mod error;
mod reader;
mod writer;


pub use descriptor::{PackageDescriptor, Resource, ResourceSchema, METADATA_KEY};
pub use error::PackageError;
pub use reader::read_entry;
pub use writer::write_entry;
