//! Cross-cutting error types for nudge.
//!
//! Storage crates convert their own errors into `RepositoryError` at the
//! repository boundary. The prompt queue surfaces those unchanged inside
//! `QueueError`.

use thiserror::Error;

/// Errors returned by a question or answer repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// An entity with the same id already exists.
    #[error("Duplicate {entity_type}: {id}")]
    Duplicate { entity_type: String, id: String },

    /// The storage backend failed.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Errors returned by the prompt queue service.
#[derive(Debug, Error)]
pub enum QueueError {
    /// A recurring question broke a structural rule and was not stored.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// A repository call failed. Never retried.
    #[error("Repository failure: {0}")]
    Repository(#[from] RepositoryError),
}
