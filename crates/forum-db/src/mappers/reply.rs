//! Reply entity <-> model mapper

use forum_core::entities::{NewReply, Reply, ReplyPayload};
use forum_core::DomainError;

use crate::models::ReplyModel;

use super::generate_id;

impl TryFrom<ReplyModel> for Reply {
    type Error = DomainError;

    fn try_from(model: ReplyModel) -> Result<Self, Self::Error> {
        Reply::new(ReplyPayload {
            id: model.id,
            content: model.content,
            owner: model.owner,
            parent: model.parent,
            date: Some(model.created_at.and_utc()),
            is_deleted: model.is_deleted,
            username: model.username,
        })
    }
}

/// Values for a reply insert, with a freshly generated id
pub struct NewReplyInsert<'a> {
    pub id: String,
    pub content: &'a str,
    pub owner: &'a str,
    pub parent: &'a str,
}

impl<'a> NewReplyInsert<'a> {
    pub fn new(reply: &'a NewReply) -> Self {
        Self {
            id: generate_id("reply"),
            content: &reply.content,
            owner: &reply.owner,
            parent: &reply.parent,
        }
    }
}
