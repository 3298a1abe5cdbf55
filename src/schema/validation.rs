/// Errors raised when a table's shape or field list is inconsistent
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// Two fields share the same name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// Columns do not all have the same number of rows
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column
        column: String,
        /// Row count of the first column
        expected: usize,
        /// Row count of the offending column
        found: usize,
    },

    /// Fields and columns are not paired one-to-one
    #[error("Table has {fields} fields but {columns} columns")]
    ArityMismatch {
        /// Number of field descriptors
        fields: usize,
        /// Number of value columns
        columns: usize,
    },

    /// A named field does not exist
    #[error("No field with name '{0}' found")]
    FieldNotFound(String),
}
