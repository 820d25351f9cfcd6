//! Like toggles for threads and comments
//!
//! A toggle reads the current state and flips it. The check and the write
//! are separate calls; the storage adapter guards against duplicate rows.

use serde::Serialize;
use tracing::{info, instrument};

use super::comments::CommentTarget;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeToggle {
    Liked,
    Disliked,
}

/// Like a thread, or remove the like if it is already there
pub struct LikeThreadUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeThreadUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, user_id: &str, thread_id: &str) -> ServiceResult<LikeToggle> {
        let likes = self.ctx.require_like_repo()?;

        self.ctx
            .thread_repo()
            .verify_thread_availability(thread_id)
            .await?;

        let toggle = if likes.check_is_liked_thread(thread_id, user_id).await? {
            likes.dislike_thread(thread_id, user_id).await?;
            LikeToggle::Disliked
        } else {
            likes.like_thread(thread_id, user_id).await?;
            LikeToggle::Liked
        };

        info!(thread_id = %thread_id, ?toggle, "Thread like toggled");

        Ok(toggle)
    }
}

/// Like a comment, or remove the like if it is already there
pub struct LikeCommentUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeCommentUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, user_id: &str, ids: CommentTarget<'_>) -> ServiceResult<LikeToggle> {
        let likes = self.ctx.require_like_repo()?;

        self.ctx
            .thread_repo()
            .verify_thread_availability(ids.thread_id)
            .await?;
        self.ctx
            .comment_repo()
            .verify_comment_availability(ids.comment_id)
            .await?;

        let toggle = if likes.check_is_liked_comment(ids.comment_id, user_id).await? {
            likes.dislike_comment(ids.comment_id, user_id).await?;
            LikeToggle::Disliked
        } else {
            likes.like_comment(ids.comment_id, user_id).await?;
            LikeToggle::Liked
        };

        info!(comment_id = %ids.comment_id, ?toggle, "Comment like toggled");

        Ok(toggle)
    }
}
