//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Domain failures pass through unchanged inside [`ApplicationError::Domain`];
//! the remaining variants cover request validation and port failures. The
//! boundary classification (`status_code`, `error_code`) is defined here so
//! every outer layer maps failures the same way.

use crate::domain::errors::{DomainError, DomainErrorKind};
use thiserror::Error;

/// Failure reported by a repository port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store could not be reached or did not answer.
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    /// The write conflicted with data already stored.
    #[error("repository conflict: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain failure, displayed exactly as the domain formatted it.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request validation failed before reaching the domain.
    #[error("validation error: {0}")]
    Validation(String),

    /// A repository port failed.
    #[error("repository error")]
    Repository(#[from] RepositoryError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the wrapped domain failure, if this is one.
    #[must_use]
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the HTTP-style status a boundary should report.
    ///
    /// | Failure | Status |
    /// |---------|--------|
    /// | product / customer not found | 404 |
    /// | insufficient stock | 409 |
    /// | other domain failure | 422 |
    /// | validation | 400 |
    /// | repository conflict | 409 |
    /// | repository unavailable / internal | 500 |
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(err) => match err.kind() {
                DomainErrorKind::NotFound => 404,
                DomainErrorKind::BusinessRuleViolation => 409,
                DomainErrorKind::General => 422,
            },
            Self::Validation(_) => 400,
            Self::Repository(RepositoryError::Conflict(_)) => 409,
            Self::Repository(RepositoryError::Unavailable(_)) | Self::Internal(_) => 500,
        }
    }

    /// Returns the stable machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(err) => match err.kind() {
                DomainErrorKind::NotFound => "NOT_FOUND",
                DomainErrorKind::BusinessRuleViolation => "CONFLICT",
                DomainErrorKind::General => "DOMAIN_ERROR",
            },
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Repository(RepositoryError::Conflict(_)) => "CONFLICT",
            Self::Repository(RepositoryError::Unavailable(_)) | Self::Internal(_) => {
                "INTERNAL_ERROR"
            }
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
