//! Thread entity - the root of a discussion

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::comment::Comment;
use super::payload::{like_count, require_text, JsonPayload};
use crate::error::{DomainError, DomainResult, EntityKind};

/// Title and body shown in place of a soft-deleted thread
pub const DELETED_THREAD_CONTENT: &str = "**thread telah dihapus**";

/// Raw thread fields as read from storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadPayload {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
    pub date: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub like_count: i64,
    pub username: Option<String>,
}

/// Thread creation payload (no id, no date)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

/// Thread entity
///
/// Content fields are masked at construction when the thread is
/// soft-deleted; the original title and body are not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    id: String,
    title: String,
    body: String,
    owner: String,
    date: DateTime<Utc>,
    is_deleted: bool,
    like_count: u64,
    username: Option<String>,
    comments: Vec<Comment>,
}

impl Thread {
    /// Build a thread, masking title and body if it was soft-deleted
    pub fn new(payload: ThreadPayload) -> DomainResult<Self> {
        require_text(
            EntityKind::Thread,
            &[&payload.id, &payload.title, &payload.body, &payload.owner],
        )?;
        let like_count = like_count(EntityKind::Thread, payload.like_count)?;

        let (title, body) = if payload.is_deleted {
            (
                DELETED_THREAD_CONTENT.to_string(),
                DELETED_THREAD_CONTENT.to_string(),
            )
        } else {
            (payload.title, payload.body)
        };

        Ok(Self {
            id: payload.id,
            title,
            body,
            owner: payload.owner,
            date: payload.date.unwrap_or_else(Utc::now),
            is_deleted: payload.is_deleted,
            like_count,
            username: payload.username,
            comments: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn owner(&self) -> &str {
        &self.owner
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

    /// Comments, populated only during thread aggregation
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Whether `user_id` owns this thread
    #[inline]
    pub fn verify_owner(&self, user_id: &str) -> bool {
        self.owner == user_id
    }

    /// Attach the thread's comments (each already carrying its replies)
    pub fn initiate_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
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

impl TryFrom<&Value> for Thread {
    type Error = DomainError;

    fn try_from(value: &Value) -> DomainResult<Self> {
        let payload = JsonPayload::new(EntityKind::Thread, value)?;
        payload.require(&["id", "title", "body", "owner"])?;

        let thread = Self::new(ThreadPayload {
            id: payload.string("id")?,
            title: payload.string("title")?,
            body: payload.string("body")?,
            owner: payload.string("owner")?,
            date: Some(payload.date("date")?),
            is_deleted: payload.flag("isDeleted")?,
            like_count: 0,
            username: payload.optional_string("username")?,
        })?;

        Ok(thread.with_like_count(payload.count("likeCount")?))
    }
}
