//! Shared error types for the commission service

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        field: String,
        value: String,
        min: String,
    },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: String, value: String },

    #[error("{field} is required")]
    MissingField { field: String },

    #[error("{field} is not a valid {expected}: {value}")]
    InvalidFormat {
        field: String,
        value: String,
        expected: String,
    },
}

impl SharedError {
    /// Name of the offending input field
    pub fn field(&self) -> &str {
        match self {
            SharedError::OutOfRange { field, .. }
            | SharedError::BelowMinimum { field, .. }
            | SharedError::NotPositive { field, .. }
            | SharedError::MissingField { field }
            | SharedError::InvalidFormat { field, .. } => field,
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
