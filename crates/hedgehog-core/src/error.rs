//! Error types for the record store.

use thiserror::Error;

use crate::record::RecordId;
use crate::validate::ValidationErrors;

/// Result type alias using the store error type.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned by [`RecordStore`](crate::RecordStore) operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// One or more field constraints were violated; nothing was written.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// No record exists with the given id.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// The underlying database could not be reached or queried.
    #[error("store unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),

    /// A stored row could not be decoded into a record.
    #[error("corrupt record {id}: {reason}")]
    Corrupt {
        /// Id of the offending row.
        id: String,
        /// What failed to decode.
        reason: String,
    },
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
