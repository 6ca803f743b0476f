//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// role misuse, balance checks). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation before any state was touched.
    #[error("validation failed on {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// An operation was attempted on a record with the wrong role
    /// (e.g. mutating or deleting the bank).
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// A balance check failed on the bank or player side.
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    /// The ledger is in a state that should be impossible (bank record
    /// missing). Unrecoverable; indicates a corrupted store.
    #[error("ledger inconsistency: {0}")]
    Inconsistency(String),
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn invalid_target(msg: impl Into<String>) -> Self {
        Self::InvalidTarget(msg.into())
    }

    pub fn insufficient_funds(msg: impl Into<String>) -> Self {
        Self::InsufficientFunds(msg.into())
    }

    pub fn inconsistency(msg: impl Into<String>) -> Self {
        Self::Inconsistency(msg.into())
    }
}
