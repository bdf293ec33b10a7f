//! Error types shared by the form model, the storage adapter and the
//! configuration loader.

use thiserror::Error;

use crate::form::FieldType;

/// Failures of operations on forms and fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The referenced form id is not in the collection
    #[error("Form '{0}' not found")]
    FormNotFound(String),

    /// The referenced field index is outside the working copy
    #[error("Field {index} not found (form has {len} fields)")]
    FieldNotFound { index: usize, len: usize },

    /// An operation needs a working copy but none is open
    #[error("No form is open")]
    NoWorkingCopy,

    /// The property does not exist on this kind of field
    #[error("'{property}' does not apply to {kind} fields")]
    PropertyNotApplicable {
        property: &'static str,
        kind: FieldType,
    },
}

/// Failures of the persistent key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data parsed but breaks the form/field shape rules
    #[error("Malformed saved state: {0}")]
    Malformed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}
