/// Errors that can occur during metadata processing
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A metadata value exists but has an unexpected shape
    #[error("Invalid metadata at '{path}': {reason}")]
    InvalidValue {
        /// Dotted path of the value
        path: String,
        /// What was expected
        reason: String,
    },
}
