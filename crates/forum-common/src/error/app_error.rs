//! Application error types
//!
//! Errors as they leave the application, with the status and code a transport
//! layer would report.

use forum_core::DomainError;
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request payload did not match its schema
    #[error("{0}")]
    Invariant(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Invariant(_) => 400,
            Self::Config(_) | Self::Internal(_) => 500,
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Invariant(_) => "INVARIANT",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response body
///
/// `status` is `"fail"` for client errors and `"error"` for server errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        // Server errors never leak their detail.
        let (status, message) = if err.is_server_error() {
            ("error", "an unexpected error occurred on our server".to_string())
        } else {
            ("fail", err.to_string())
        };

        Self {
            status,
            code: err.error_code(),
            message,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::{EntityKind, GuardedAction, RepositoryKind};

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Invariant("bad".to_string()).status_code(), 400);
        assert_eq!(AppError::Config("DATABASE_URL".to_string()).status_code(), 500);
        assert_eq!(
            AppError::internal(anyhow::anyhow!("boom")).status_code(),
            500
        );
    }

    #[test]
    fn test_domain_status_codes() {
        let not_found = AppError::from(DomainError::ThreadNotFound("thread-1".to_string()));
        assert_eq!(not_found.status_code(), 404);

        let forbidden = AppError::from(DomainError::NotAuthorized {
            action: GuardedAction::DeleteComment,
        });
        assert_eq!(forbidden.status_code(), 403);

        let invalid = AppError::from(DomainError::missing_property(EntityKind::Reply));
        assert_eq!(invalid.status_code(), 400);

        let unimplemented = AppError::from(DomainError::MethodNotImplemented {
            repository: RepositoryKind::Like,
        });
        assert_eq!(unimplemented.status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Invariant("x".to_string()).error_code(), "INVARIANT");
        assert_eq!(AppError::Config("x".to_string()).error_code(), "CONFIG_ERROR");
        assert_eq!(
            AppError::from(DomainError::CommentNotFound("comment-1".to_string())).error_code(),
            "COMMENT_NOT_FOUND"
        );
    }

    #[test]
    fn test_error_response_for_client_error() {
        let err = AppError::Invariant("\"title\" must not be empty".to_string());
        let response = ErrorResponse::from(&err);

        assert_eq!(response.status, "fail");
        assert_eq!(response.code, "INVARIANT");
        assert_eq!(response.message, "\"title\" must not be empty");
    }

    #[test]
    fn test_error_response_hides_server_detail() {
        let err = AppError::internal(anyhow::anyhow!("connection reset"));
        let response = ErrorResponse::from(&err);

        assert_eq!(response.status, "error");
        assert_eq!(response.code, "INTERNAL_ERROR");
        assert!(!response.message.contains("connection reset"));
    }

    #[test]
    fn test_error_response_serializes() {
        let err = AppError::from(DomainError::ThreadNotFound("thread-1".to_string()));
        let value = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(value["status"], "fail");
        assert_eq!(value["code"], "THREAD_NOT_FOUND");
    }
}
