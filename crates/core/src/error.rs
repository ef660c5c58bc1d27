//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Transport
/// concerns (status codes, message tables) belong to the API layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced item does not exist.
    #[error("not found")]
    NotFound,

    /// A pagination window starts beyond the available data.
    #[error("page/size limit exceeded")]
    RangeExceeded,
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn range_exceeded() -> Self {
        Self::RangeExceeded
    }
}
