//! Comment entity <-> model mapper

use forum_core::entities::{Comment, CommentPayload, NewComment};
use forum_core::DomainError;

use crate::models::CommentModel;

use super::generate_id;

impl TryFrom<CommentModel> for Comment {
    type Error = DomainError;

    fn try_from(model: CommentModel) -> Result<Self, Self::Error> {
        Comment::new(CommentPayload {
            id: model.id,
            content: model.content,
            owner: model.owner,
            thread: model.thread,
            date: Some(model.created_at.and_utc()),
            is_deleted: model.is_deleted,
            like_count: 0,
            username: model.username,
        })
    }
}

/// Values for a comment insert, with a freshly generated id
pub struct NewCommentInsert<'a> {
    pub id: String,
    pub content: &'a str,
    pub owner: &'a str,
    pub thread: &'a str,
}

impl<'a> NewCommentInsert<'a> {
    pub fn new(comment: &'a NewComment) -> Self {
        Self {
            id: generate_id("comment"),
            content: &comment.content,
            owner: &comment.owner,
            thread: &comment.thread,
        }
    }
}
