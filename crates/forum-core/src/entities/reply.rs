//! Reply entity - a response to a comment

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::payload::{require_text, JsonPayload};
use crate::error::{DomainError, DomainResult, EntityKind};

/// Content shown in place of a soft-deleted reply
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// Raw reply fields as read from storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyPayload {
    pub id: String,
    pub content: String,
    pub owner: String,
    /// Parent comment id
    pub parent: String,
    pub date: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub username: Option<String>,
}

/// Reply creation payload (no id, no date)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub content: String,
    pub owner: String,
    pub parent: String,
}

/// Reply entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    id: String,
    content: String,
    owner: String,
    parent: String,
    date: DateTime<Utc>,
    is_deleted: bool,
    username: Option<String>,
}

impl Reply {
    /// Build a reply, masking its content if it was soft-deleted
    pub fn new(payload: ReplyPayload) -> DomainResult<Self> {
        require_text(
            EntityKind::Reply,
            &[&payload.content, &payload.owner, &payload.parent],
        )?;

        let content = if payload.is_deleted {
            DELETED_REPLY_CONTENT.to_string()
        } else {
            payload.content
        };

        Ok(Self {
            id: payload.id,
            content,
            owner: payload.owner,
            parent: payload.parent,
            date: payload.date.unwrap_or_else(Utc::now),
            is_deleted: payload.is_deleted,
            username: payload.username,
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

    /// Parent comment id
    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Whether `user_id` owns this reply
    #[inline]
    pub fn verify_owner(&self, user_id: &str) -> bool {
        self.owner == user_id
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

impl TryFrom<&Value> for Reply {
    type Error = DomainError;

    fn try_from(value: &Value) -> DomainResult<Self> {
        let payload = JsonPayload::new(EntityKind::Reply, value)?;
        payload.require(&["content", "owner", "parent"])?;

        Self::new(ReplyPayload {
            id: payload.string("id")?,
            content: payload.string("content")?,
            owner: payload.string("owner")?,
            parent: payload.string("parent")?,
            date: Some(payload.date("date")?),
            is_deleted: payload.flag("isDeleted")?,
            username: payload.optional_string("username")?,
        })
    }
}
