//! Error handling utilities for repositories

use forum_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Whether the error is a unique constraint violation
pub fn is_unique_violation(e: &SqlxError) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Convert a stored count into the unsigned count the ports expose
pub fn to_count(count: i64) -> Result<u64, DomainError> {
    u64::try_from(count).map_err(|_| DomainError::DatabaseError(format!("negative count: {count}")))
}

pub fn thread_not_found(id: &str) -> DomainError {
    DomainError::ThreadNotFound(id.to_string())
}

pub fn comment_not_found(id: &str) -> DomainError {
    DomainError::CommentNotFound(id.to_string())
}

pub fn reply_not_found(id: &str) -> DomainError {
    DomainError::ReplyNotFound(id.to_string())
}
