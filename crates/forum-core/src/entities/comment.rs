//! Comment entity - a top-level response in a thread

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::payload::{like_count, require_text, JsonPayload};
use super::reply::Reply;
use crate::error::{DomainError, DomainResult, EntityKind};

/// Content shown in place of a soft-deleted comment
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// Raw comment fields as read from storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPayload {
    pub id: String,
    pub content: String,
    pub owner: String,
    /// Parent thread id
    pub thread: String,
    pub date: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub like_count: i64,
    pub username: Option<String>,
}

/// Comment creation payload (no id, no date)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub owner: String,
    pub thread: String,
}

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: String,
    content: String,
    owner: String,
    thread: String,
    date: DateTime<Utc>,
    is_deleted: bool,
    like_count: u64,
    username: Option<String>,
    replies: Vec<Reply>,
}

impl Comment {
    /// Build a comment, masking its content if it was soft-deleted
    pub fn new(payload: CommentPayload) -> DomainResult<Self> {
        require_text(
            EntityKind::Comment,
            &[&payload.content, &payload.owner, &payload.thread],
        )?;
        let like_count = like_count(EntityKind::Comment, payload.like_count)?;

        let content = if payload.is_deleted {
            DELETED_COMMENT_CONTENT.to_string()
        } else {
            payload.content
        };

        Ok(Self {
            id: payload.id,
            content,
            owner: payload.owner,
            thread: payload.thread,
            date: payload.date.unwrap_or_else(Utc::now),
            is_deleted: payload.is_deleted,
            like_count,
            username: payload.username,
            replies: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Parent thread id
    pub fn thread(&self) -> &str {
        &self.thread
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub fn like_count(&self) -> u64 {
        self.like_count
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Replies, populated only during thread aggregation
    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }

    /// Whether `user_id` owns this comment
    #[inline]
    pub fn verify_owner(&self, user_id: &str) -> bool {
        self.owner == user_id
    }

    /// Attach this comment's replies
    pub fn initiate_replies(&mut self, replies: Vec<Reply>) {
        self.replies = replies;
    }

    pub fn with_like_count(mut self, like_count: u64) -> Self {
        self.like_count = like_count;
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

impl TryFrom<&Value> for Comment {
    type Error = DomainError;

    fn try_from(value: &Value) -> DomainResult<Self> {
        let payload = JsonPayload::new(EntityKind::Comment, value)?;
        payload.require(&["content", "owner", "thread"])?;

        let comment = Self::new(CommentPayload {
            id: payload.string("id")?,
            content: payload.string("content")?,
            owner: payload.string("owner")?,
            thread: payload.string("thread")?,
            date: Some(payload.date("date")?),
            is_deleted: payload.flag("isDeleted")?,
            like_count: 0,
            username: payload.optional_string("username")?,
        })?;

        Ok(comment.with_like_count(payload.count("likeCount")?))
    }
}
