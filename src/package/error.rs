use std::path::PathBuf;

use crate::metadata::MetadataError;
use crate::schema::SchemaError;

/// Errors that can occur while reading or writing packages
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON descriptor error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Embedded metadata is malformed
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// Values do not fit the declared schema
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Descriptor and data file disagree, or the layout is not supported
    #[error("Invalid package {path}: {reason}")]
    InvalidFormat {
        /// Offending file
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// A CSV cell is not a number
    #[error("Invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        /// Column name
        column: String,
        /// Data row, starting at 1
        row: usize,
        /// Raw cell content
        value: String,
    },
}

impl PackageError {
    pub(crate) fn invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        PackageError::InvalidFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
