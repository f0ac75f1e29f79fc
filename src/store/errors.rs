//! Store error types
//!
//! Conflicts are distinguished by field (phone vs email) so the API layer
//! can report them with the exact user-facing message. Anything the
//! storage engine rejects that is not a recognized uniqueness violation
//! surfaces as a generic integrity error.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by the student store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another row already holds the candidate phone number.
    #[error("A student with this phone number already exists.")]
    PhoneConflict,

    /// The email UNIQUE constraint rejected the write.
    #[error("A student with this email already exists.")]
    EmailConflict,

    /// The targeted id matched no row.
    #[error("Student not found")]
    NotFound,

    /// Any other storage-level constraint violation, reported generically.
    #[error("Database integrity error")]
    Integrity,

    /// Underlying SQLite failure (I/O, corruption, bad statement).
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    /// True for the two uniqueness conflicts.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::PhoneConflict | StoreError::EmailConflict)
    }
}
