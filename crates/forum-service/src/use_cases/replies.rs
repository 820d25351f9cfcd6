//! Reply use cases
//!
//! Both use cases walk the ancestors first: thread, then comment.

use forum_core::entities::{NewReply, Reply};
use forum_core::{DomainError, GuardedAction};
use tracing::{info, instrument};

use crate::dto::AddReplyRequest;
use crate::validation::validate_payload;

use super::comments::CommentTarget;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Identifies a reply together with its comment and thread
#[derive(Debug, Clone, Copy)]
pub struct ReplyTarget<'a> {
    pub thread_id: &'a str,
    pub comment_id: &'a str,
    pub reply_id: &'a str,
}

/// Reply to an existing comment
pub struct AddReplyUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AddReplyUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, payload))]
    pub async fn execute(
        &self,
        user_id: &str,
        ids: CommentTarget<'_>,
        payload: serde_json::Value,
    ) -> ServiceResult<Reply> {
        self.ctx
            .thread_repo()
            .verify_thread_availability(ids.thread_id)
            .await?;
        self.ctx
            .comment_repo()
            .verify_comment_availability(ids.comment_id)
            .await?;

        let request: AddReplyRequest = validate_payload(payload)?;

        let new_reply = NewReply {
            content: request.content,
            owner: user_id.to_string(),
            parent: ids.comment_id.to_string(),
        };
        let reply = self.ctx.reply_repo().add_reply(&new_reply).await?;

        info!(reply_id = %reply.id(), comment_id = %ids.comment_id, "Reply created");

        Ok(reply)
    }
}

/// Soft-delete a reply; only its owner may do so
pub struct DeleteReplyByIdUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DeleteReplyByIdUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, user_id: &str, ids: ReplyTarget<'_>) -> ServiceResult<()> {
        self.ctx
            .thread_repo()
            .verify_thread_availability(ids.thread_id)
            .await?;
        self.ctx
            .comment_repo()
            .verify_comment_availability(ids.comment_id)
            .await?;

        let reply = self.ctx.reply_repo().get_reply_by_id(ids.reply_id).await?;

        if !reply.verify_owner(user_id) {
            return Err(DomainError::NotAuthorized {
                action: GuardedAction::DeleteReply,
            }
            .into());
        }

        self.ctx.reply_repo().delete_reply_by_id(ids.reply_id).await?;

        info!(reply_id = %ids.reply_id, "Reply soft-deleted");

        Ok(())
    }
}
