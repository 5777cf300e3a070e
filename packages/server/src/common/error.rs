//! Domain error taxonomy.
//!
//! Validation and permission errors are raised before any write; conflicts
//! are detected inside the transaction and abort it. Mirror-store failures
//! are caught at the replicator boundary and never surface from the
//! messaging operations.

use thiserror::Error;

/// Errors produced by the workflow core.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Upstream store unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        // Unique-key violations are workflow conflicts (duplicate application,
        // duplicate grant), not internal failures.
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return DomainError::Conflict(db_err.message().to_string());
            }
        }
        DomainError::Database(err)
    }
}

impl DomainError {
    /// Convenience for ownership/relationship failures.
    pub fn denied(reason: impl Into<String>) -> Self {
        DomainError::PermissionDenied(reason.into())
    }

    /// Convenience for illegal state transitions.
    pub fn conflict(reason: impl Into<String>) -> Self {
        DomainError::Conflict(reason.into())
    }
}

/// Result alias used by all workflow operations.
pub type DomainResult<T> = Result<T, DomainError>;
