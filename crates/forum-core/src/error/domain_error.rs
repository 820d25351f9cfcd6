//! Domain errors - error types for the domain layer

use std::fmt;

use thiserror::Error;

/// Entity kinds that carry constructor-time validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Thread,
    Comment,
    Reply,
}

impl EntityKind {
    /// Upper-case prefix used in error codes
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Thread => "THREAD",
            Self::Comment => "COMMENT",
            Self::Reply => "REPLY",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Why an entity payload was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// A required field is missing or empty
    NotContainNeededProperty,
    /// A present field has the wrong type or an out-of-range value
    NotMeetDataTypeSpecification,
}

impl ValidationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotContainNeededProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            Self::NotMeetDataTypeSpecification => "NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owner-guarded mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardedAction {
    DeleteThread,
    DeleteComment,
    DeleteReply,
}

impl fmt::Display for GuardedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DeleteThread => "delete this thread",
            Self::DeleteComment => "delete this comment",
            Self::DeleteReply => "delete this reply",
        })
    }
}

/// Repository ports, named in `MethodNotImplemented` errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryKind {
    Thread,
    Comment,
    Reply,
    Like,
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Thread => "THREAD_REPOSITORY",
            Self::Comment => "COMMENT_REPOSITORY",
            Self::Reply => "REPLY_REPOSITORY",
            Self::Like => "LIKE_REPOSITORY",
        })
    }
}

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{entity}.{kind}")]
    Validation {
        entity: EntityKind,
        kind: ValidationKind,
    },

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Thread not found: {0}")]
    ThreadNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    #[error("Reply not found: {0}")]
    ReplyNotFound(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not authorized to {action}")]
    NotAuthorized { action: GuardedAction },

    // =========================================================================
    // Port Contract Violations
    // =========================================================================
    #[error("{repository}.METHOD_NOT_IMPLEMENTED")]
    MethodNotImplemented { repository: RepositoryKind },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Shorthand for a missing-field validation failure
    pub fn missing_property(entity: EntityKind) -> Self {
        Self::Validation {
            entity,
            kind: ValidationKind::NotContainNeededProperty,
        }
    }

    /// Shorthand for a wrong-type validation failure
    pub fn invalid_type(entity: EntityKind) -> Self {
        Self::Validation {
            entity,
            kind: ValidationKind::NotMeetDataTypeSpecification,
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        use EntityKind as E;
        use ValidationKind as V;

        match self {
            // Validation
            Self::Validation { entity, kind } => match (entity, kind) {
                (E::Thread, V::NotContainNeededProperty) => "THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
                (E::Thread, V::NotMeetDataTypeSpecification) => {
                    "THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION"
                }
                (E::Comment, V::NotContainNeededProperty) => "COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
                (E::Comment, V::NotMeetDataTypeSpecification) => {
                    "COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION"
                }
                (E::Reply, V::NotContainNeededProperty) => "REPLY.NOT_CONTAIN_NEEDED_PROPERTY",
                (E::Reply, V::NotMeetDataTypeSpecification) => {
                    "REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION"
                }
            },

            // Not Found
            Self::ThreadNotFound(_) => "THREAD_NOT_FOUND",
            Self::CommentNotFound(_) => "COMMENT_NOT_FOUND",
            Self::ReplyNotFound(_) => "REPLY_NOT_FOUND",

            // Authorization
            Self::NotAuthorized { action } => match action {
                GuardedAction::DeleteThread => "DELETE_THREAD_USECASE.NOT_AUTHORIZED",
                GuardedAction::DeleteComment => "DELETE_COMMENT_USECASE.NOT_AUTHORIZED",
                GuardedAction::DeleteReply => "DELETE_REPLY_USECASE.NOT_AUTHORIZED",
            },

            // Port contract
            Self::MethodNotImplemented { repository } => match repository {
                RepositoryKind::Thread => "THREAD_REPOSITORY.METHOD_NOT_IMPLEMENTED",
                RepositoryKind::Comment => "COMMENT_REPOSITORY.METHOD_NOT_IMPLEMENTED",
                RepositoryKind::Reply => "REPLY_REPOSITORY.METHOD_NOT_IMPLEMENTED",
                RepositoryKind::Like => "LIKE_REPOSITORY.METHOD_NOT_IMPLEMENTED",
            },

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ThreadNotFound(_) | Self::CommentNotFound(_) | Self::ReplyNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotAuthorized { .. })
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
