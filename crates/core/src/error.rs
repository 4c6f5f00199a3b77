//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both variants carry the human-readable reason verbatim; `Display` renders
/// only the reason so callers can surface it unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A single ticket line item was malformed at construction time.
    #[error("{0}")]
    InvalidRequest(String),

    /// A purchase rule was violated (account id, request shape, adult presence, capacity).
    #[error("{0}")]
    InvalidPurchase(String),
}

impl DomainError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn invalid_purchase(msg: impl Into<String>) -> Self {
        Self::InvalidPurchase(msg.into())
    }

    /// The reason string carried by this error.
    pub fn reason(&self) -> &str {
        match self {
            DomainError::InvalidRequest(reason) | DomainError::InvalidPurchase(reason) => reason,
        }
    }
}
