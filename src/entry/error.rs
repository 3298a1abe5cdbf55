use crate::electrochemistry::ElectrodeError;
use crate::schema::SchemaError;
use crate::units::UnitError;

/// Errors raised by entry transformations.
///
/// A failing transformation never hands back a partially updated entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryError {
    /// Unit parsing failed or units are dimensionally incompatible
    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),

    /// Reference electrode lookup or scale conversion failed
    #[error("Reference electrode error: {0}")]
    Electrode(#[from] ElectrodeError),

    /// The resulting table would be inconsistent, or a field is missing
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A unit is required but neither declared on the field nor supplied
    #[error("Field '{0}' has no unit and none was supplied")]
    MissingUnit(String),

    /// A reference scale operation on a field without `reference`
    #[error("No reference is associated with field '{0}'")]
    NoReference(String),

    /// Required entry metadata is absent
    #[error("Missing metadata: {0}")]
    MissingMetadata(String),

    /// A scan rate is zero or not finite
    #[error("Invalid scan rate: {0}")]
    InvalidScanRate(f64),

    /// The field's recorded `scalingFactor` cannot be undone
    #[error("Invalid scaling factor: {0}")]
    InvalidScalingFactor(f64),

    /// No electrode with this label in the entry's system
    #[error("Electrode with name '{0}' does not exist")]
    ElectrodeNotFound(String),
}
