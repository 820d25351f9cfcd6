//! Request DTOs for use case payloads
//!
//! All request DTOs implement `Deserialize` and `Validate`. Unknown keys
//! (including `owner`) are rejected.

use serde::Deserialize;
use validator::Validate;

/// New thread payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AddThreadRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub body: String,
}

/// New comment payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
}

/// New reply payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AddReplyRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
}
