//! Custom error types for satchel-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for satchel-cli operations
#[derive(Error, Debug)]
pub enum SatchelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} with ID {id} not found")]
    NotFound { entity_type: &'static str, id: u64 },

    /// A backing document that doesn't parse, isn't an array, or whose
    /// records miss required fields
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// A string failed DD-MM-YYYY parsing
    #[error("Invalid date '{0}': expected DD-MM-YYYY")]
    DateFormat(String),

    /// A CSV row is structurally unreadable (too few columns, bad syntax)
    #[error("CSV structure error: {0}")]
    CsvStructure(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SatchelError {
    /// Create a "not found" error for notes
    pub fn note_not_found(id: u64) -> Self {
        Self::NotFound {
            entity_type: "Note",
            id,
        }
    }

    /// Create a "not found" error for tasks
    pub fn task_not_found(id: u64) -> Self {
        Self::NotFound {
            entity_type: "Task",
            id,
        }
    }

    /// Create a "not found" error for contacts
    pub fn contact_not_found(id: u64) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            id,
        }
    }

    /// Create a "not found" error for finance records
    pub fn finance_record_not_found(id: u64) -> Self {
        Self::NotFound {
            entity_type: "Finance record",
            id,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SatchelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SatchelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for satchel-cli operations
pub type SatchelResult<T> = Result<T, SatchelError>;
