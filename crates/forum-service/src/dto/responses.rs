//! Response DTOs
//!
//! All response DTOs implement `Serialize` with camelCase keys.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Thread as returned right after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadResponse {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// Thread in a listing, without its comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSummaryResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Fully assembled thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadDetailResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub like_count: u64,
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub date: DateTime<Utc>,
    pub content: String,
    pub like_count: u64,
    pub replies: Vec<ReplyResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentResponse {
    pub id: String,
    pub content: String,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyResponse {
    pub id: String,
    pub content: String,
    pub owner: String,
}
