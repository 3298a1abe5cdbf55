/// Errors raised by reference electrode lookups and scale conversions
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElectrodeError {
    /// The registry has no electrode (or alias) with this name
    #[error("Unknown reference electrode: '{0}'")]
    UnknownElectrode(String),

    /// The electrode does not have exactly one preferred entry
    #[error("Reference electrode '{name}' has {count} preferred entries, expected exactly one")]
    AmbiguousPreferred {
        /// Electrode name
        name: String,
        /// Number of entries flagged as preferred
        count: usize,
    },

    /// A conversion involving the RHE scale was requested without a pH
    #[error("pH must be provided for conversion between '{from}' and '{to}'")]
    MissingPH {
        /// Source scale
        from: String,
        /// Target scale
        to: String,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for ElectrodeError {
    fn from(err: serde_json::Error) -> Self {
        ElectrodeError::JsonError(err.to_string())
    }
}
