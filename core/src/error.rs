//! Error types for the todo store.
//!
//! # Design
//! Only two things can go wrong in an in-memory store: the addressed record
//! is missing, or an update names one ID in the path and another in the
//! record. Both are terminal for the call that raised them.

use thiserror::Error;

pub type Result<T, E = TodoError> = std::result::Result<T, E>;

/// Errors returned by `TodoService` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// No stored todo has the requested ID.
    #[error("not found")]
    NotFound,

    /// The ID passed to `update` differs from the ID inside the record.
    #[error("inconsistent IDs")]
    InconsistentIds,
}
