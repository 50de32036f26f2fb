//! Commission-specific error types
//!
//! Failures fall into three tiers: invalid input, domain failures the caller
//! must see as-is (missing records, insufficient role), and everything else,
//! which each engine operation reports under its own generic message.

use shared::SharedError;
use thiserror::Error;

/// Failures raised by a data provider backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataProviderError {
    #[error("Failed to load dataset from {path}: {message}")]
    LoadFailed { path: String, message: String },

    #[error("Data provider unavailable: {message}")]
    Unavailable { message: String },
}

pub type DataResult<T> = Result<T, DataProviderError>;

/// Caller-visible classification of a [`CommissionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Unauthorized,
    Internal,
}

#[derive(Error, Debug)]
pub enum CommissionError {
    #[error("{0}")]
    Validation(#[from] SharedError),

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{operation}")]
    Internal { operation: String, reason: String },

    #[error("Data provider error: {0}")]
    DataProvider(#[from] DataProviderError),
}

impl CommissionError {
    pub fn not_found(message: impl Into<String>) -> Self {
        CommissionError::NotFound {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        CommissionError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CommissionError::Validation(_) => ErrorKind::Validation,
            CommissionError::NotFound { .. } => ErrorKind::NotFound,
            CommissionError::Unauthorized { .. } => ErrorKind::Unauthorized,
            CommissionError::Internal { .. } | CommissionError::DataProvider(_) => ErrorKind::Internal,
        }
    }

    /// Re-surface a failure under an operation's generic message
    ///
    /// Validation, NotFound and Unauthorized pass through unchanged. Anything
    /// else becomes `Internal` with `operation` as its message; the original
    /// cause is kept in `reason`.
    pub fn for_operation(self, operation: &str) -> Self {
        match self {
            CommissionError::Internal { reason, .. } => CommissionError::Internal {
                operation: operation.to_string(),
                reason,
            },
            CommissionError::DataProvider(source) => CommissionError::Internal {
                operation: operation.to_string(),
                reason: source.to_string(),
            },
            domain => domain,
        }
    }

    /// Underlying cause for internal failures
    pub fn reason(&self) -> Option<&str> {
        match self {
            CommissionError::Internal { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

pub type CommissionResult<T> = Result<T, CommissionError>;
