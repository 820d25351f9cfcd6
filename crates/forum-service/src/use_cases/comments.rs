//! Comment use cases

use forum_core::entities::{Comment, NewComment};
use forum_core::{DomainError, GuardedAction};
use tracing::{info, instrument};

use crate::dto::AddCommentRequest;
use crate::validation::validate_payload;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Identifies a comment together with its thread
#[derive(Debug, Clone, Copy)]
pub struct CommentTarget<'a> {
    pub thread_id: &'a str,
    pub comment_id: &'a str,
}

/// Add a comment to an existing thread
pub struct AddCommentUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AddCommentUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, payload))]
    pub async fn execute(
        &self,
        user_id: &str,
        thread_id: &str,
        payload: serde_json::Value,
    ) -> ServiceResult<Comment> {
        self.ctx
            .thread_repo()
            .verify_thread_availability(thread_id)
            .await?;

        let request: AddCommentRequest = validate_payload(payload)?;

        let new_comment = NewComment {
            content: request.content,
            owner: user_id.to_string(),
            thread: thread_id.to_string(),
        };
        let comment = self.ctx.comment_repo().add_comment(&new_comment).await?;

        info!(comment_id = %comment.id(), thread_id = %thread_id, "Comment created");

        Ok(comment)
    }
}

/// Soft-delete a comment; only its owner may do so
pub struct DeleteCommentByIdUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DeleteCommentByIdUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, user_id: &str, ids: CommentTarget<'_>) -> ServiceResult<()> {
        self.ctx
            .thread_repo()
            .verify_thread_availability(ids.thread_id)
            .await?;

        let comment = self
            .ctx
            .comment_repo()
            .get_comment_by_id(ids.comment_id)
            .await?;

        if !comment.verify_owner(user_id) {
            return Err(DomainError::NotAuthorized {
                action: GuardedAction::DeleteComment,
            }
            .into());
        }

        self.ctx
            .comment_repo()
            .delete_comment_by_id(ids.comment_id)
            .await?;

        info!(comment_id = %ids.comment_id, "Comment soft-deleted");

        Ok(())
    }
}
