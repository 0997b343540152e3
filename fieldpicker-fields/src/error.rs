//! Error types for target field declarations

use thiserror::Error;

/// Result type for fields operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while declaring target fields
#[derive(Debug, Error, PartialEq)]
pub enum FieldsError {
    /// Cardinality string did not name a known variant
    #[error("unknown cardinality: {value}")]
    UnknownCardinality { value: String },

    /// Field name was empty after trimming
    #[error("target field name cannot be empty")]
    EmptyFieldName,

    /// The same field title was declared twice
    #[error("duplicate target field: {name}")]
    DuplicateFieldName { name: String },
}
