/// Errors that can occur while parsing or converting units
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    /// The unit string could not be parsed
    #[error("Cannot parse unit '{unit}': {reason}")]
    Parse {
        /// The offending unit string
        unit: String,
        /// What went wrong
        reason: String,
    },

    /// The two units do not describe the same physical dimension
    #[error("Cannot convert '{from}' to '{to}': incompatible dimensions ({from_dimension} vs {to_dimension})")]
    UnitMismatch {
        /// Source unit string
        from: String,
        /// Target unit string
        to: String,
        /// Dimension of the source unit
        from_dimension: String,
        /// Dimension of the target unit
        to_dimension: String,
    },
}

impl UnitError {
    pub(crate) fn parse(unit: &str, reason: impl Into<String>) -> Self {
        UnitError::Parse {
            unit: unit.to_string(),
            reason: reason.into(),
        }
    }
}
