//! Thread use cases
//!
//! Creating, listing, reading and soft-deleting threads. Reading a single
//! thread assembles its comments, their replies and like counts.

use forum_core::entities::{Comment, NewThread, Thread};
use forum_core::{DomainError, DomainResult, GuardedAction};
use futures::future::try_join_all;
use tracing::{debug, info, instrument};

use crate::dto::AddThreadRequest;
use crate::validation::validate_payload;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Create a thread owned by the requesting user
pub struct AddThreadUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AddThreadUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, payload))]
    pub async fn execute(&self, user_id: &str, payload: serde_json::Value) -> ServiceResult<Thread> {
        let request: AddThreadRequest = validate_payload(payload)?;

        let new_thread = NewThread {
            title: request.title,
            body: request.body,
            owner: user_id.to_string(),
        };
        let thread = self.ctx.thread_repo().add_thread(&new_thread).await?;

        info!(thread_id = %thread.id(), "Thread created");

        Ok(thread)
    }
}

/// List threads that are not soft-deleted
pub struct GetThreadsUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetThreadsUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> ServiceResult<Vec<Thread>> {
        Ok(self.ctx.thread_repo().get_threads().await?)
    }
}

/// Read one thread with its comments, replies and like counts
pub struct GetThreadByIdUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetThreadByIdUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, thread_id: &str) -> ServiceResult<Thread> {
        let mut thread = self.ctx.thread_repo().get_thread_by_id(thread_id).await?;
        let comments = self
            .ctx
            .comment_repo()
            .get_comments_by_thread_id(thread_id)
            .await?;

        let thread_likes = async {
            match self.ctx.like_repo() {
                Some(likes) => likes.get_thread_likes_count(thread_id).await.map(Some),
                None => Ok(None),
            }
        };
        let populated = try_join_all(comments.into_iter().map(|c| self.populate_comment(c)));

        let (thread_likes, comments) = tokio::try_join!(thread_likes, populated)?;

        if let Some(count) = thread_likes {
            thread = thread.with_like_count(count);
        }
        debug!(comments = comments.len(), "Thread assembled");
        thread.initiate_comments(comments);

        Ok(thread)
    }

    async fn populate_comment(&self, comment: Comment) -> DomainResult<Comment> {
        let comment_id = comment.id().to_string();

        let replies = self.ctx.reply_repo().get_replies_by_comment_id(&comment_id);
        let likes = async {
            match self.ctx.like_repo() {
                Some(likes) => likes.get_comment_likes_count(&comment_id).await.map(Some),
                None => Ok(None),
            }
        };
        let (replies, likes) = tokio::try_join!(replies, likes)?;

        let mut comment = match likes {
            Some(count) => comment.with_like_count(count),
            None => comment,
        };
        comment.initiate_replies(replies);

        Ok(comment)
    }
}

/// Soft-delete a thread; only its owner may do so
pub struct DeleteThreadByIdUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DeleteThreadByIdUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, user_id: &str, thread_id: &str) -> ServiceResult<()> {
        let thread = self.ctx.thread_repo().get_thread_by_id(thread_id).await?;

        if !thread.verify_owner(user_id) {
            return Err(DomainError::NotAuthorized {
                action: GuardedAction::DeleteThread,
            }
            .into());
        }

        self.ctx.thread_repo().delete_thread_by_id(thread_id).await?;

        info!(thread_id = %thread_id, "Thread soft-deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{comment, context, reply, thread, Repos};
    use forum_core::entities::DELETED_COMMENT_CONTENT;
    use serde_json::json;

    #[tokio::test]
    async fn test_add_thread_passes_owner_to_repository() {
        let mut repos = Repos::default();
        repos
            .threads
            .expect_add_thread()
            .withf(|new_thread| {
                *new_thread
                    == NewThread {
                        title: "t".to_string(),
                        body: "b".to_string(),
                        owner: "user-123".to_string(),
                    }
            })
            .times(1)
            .returning(|_| Ok(thread("thread-1", "user-123")));
        let ctx = context(repos);

        let added = AddThreadUseCase::new(&ctx)
            .execute("user-123", json!({ "title": "t", "body": "b" }))
            .await
            .unwrap();

        assert_eq!(added.id(), "thread-1");
        assert_eq!(added.owner(), "user-123");
    }

    #[tokio::test]
    async fn test_add_thread_rejects_invalid_payload() {
        let mut repos = Repos::default();
        repos.threads.expect_add_thread().times(0);
        let ctx = context(repos);

        let err = AddThreadUseCase::new(&ctx)
            .execute("user-123", json!({ "title": "t" }))
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "INVARIANT");
    }

    #[tokio::test]
    async fn test_get_threads() {
        let mut repos = Repos::default();
        repos.threads.expect_get_threads().times(1).returning(|| {
            Ok(vec![
                thread("thread-1", "user-123"),
                thread("thread-2", "user-456"),
            ])
        });
        let ctx = context(repos);

        let threads = GetThreadsUseCase::new(&ctx).execute().await.unwrap();

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[1].id(), "thread-2");
    }

    #[tokio::test]
    async fn test_get_thread_by_id_assembles_aggregate() {
        let mut repos = Repos::default();
        repos
            .threads
            .expect_get_thread_by_id()
            .withf(|id| id == "thread-123")
            .returning(|_| Ok(thread("thread-123", "user-123")));
        repos
            .comments
            .expect_get_comments_by_thread_id()
            .withf(|id| id == "thread-123")
            .returning(|_| Ok(vec![comment("comment-123", "user-123", false)]));
        repos
            .replies
            .expect_get_replies_by_comment_id()
            .withf(|id| id == "comment-123")
            .returning(|_| Ok(vec![reply("reply-123", "user-456", false)]));
        repos
            .likes
            .expect_get_thread_likes_count()
            .returning(|_| Ok(3));
        repos
            .likes
            .expect_get_comment_likes_count()
            .withf(|id| id == "comment-123")
            .returning(|_| Ok(2));
        let ctx = context(repos);

        let thread = GetThreadByIdUseCase::new(&ctx)
            .execute("thread-123")
            .await
            .unwrap();

        assert_eq!(thread.like_count(), 3);
        assert_eq!(thread.comments().len(), 1);
        assert_eq!(thread.comments()[0].like_count(), 2);
        assert_eq!(thread.comments()[0].replies().len(), 1);
        assert_eq!(thread.comments()[0].replies()[0].id(), "reply-123");
    }

    #[tokio::test]
    async fn test_get_thread_by_id_keeps_comment_order() {
        let mut repos = Repos::default();
        repos
            .threads
            .expect_get_thread_by_id()
            .returning(|_| Ok(thread("thread-123", "user-123")));
        repos
            .comments
            .expect_get_comments_by_thread_id()
            .returning(|_| {
                Ok(vec![
                    comment("comment-1", "user-123", false),
                    comment("comment-2", "user-456", true),
                ])
            });
        repos
            .replies
            .expect_get_replies_by_comment_id()
            .returning(|_| Ok(vec![]));
        repos.likes.expect_get_thread_likes_count().returning(|_| Ok(0));
        repos.likes.expect_get_comment_likes_count().returning(|_| Ok(0));
        let ctx = context(repos);

        let thread = GetThreadByIdUseCase::new(&ctx)
            .execute("thread-123")
            .await
            .unwrap();

        let ids: Vec<&str> = thread.comments().iter().map(Comment::id).collect();
        assert_eq!(ids, ["comment-1", "comment-2"]);
        assert_eq!(thread.comments()[1].content(), DELETED_COMMENT_CONTENT);
    }

    #[tokio::test]
    async fn test_get_thread_by_id_without_like_repository() {
        let mut repos = Repos::default();
        repos
            .threads
            .expect_get_thread_by_id()
            .returning(|_| Ok(thread("thread-123", "user-123")));
        repos
            .comments
            .expect_get_comments_by_thread_id()
            .returning(|_| Ok(vec![comment("comment-123", "user-123", false)]));
        repos
            .replies
            .expect_get_replies_by_comment_id()
            .returning(|_| Ok(vec![]));
        let ctx = repos.into_context_without_likes();

        let thread = GetThreadByIdUseCase::new(&ctx)
            .execute("thread-123")
            .await
            .unwrap();

        assert_eq!(thread.like_count(), 0);
        assert_eq!(thread.comments()[0].like_count(), 0);
    }

    #[tokio::test]
    async fn test_get_thread_by_id_not_found() {
        let mut repos = Repos::default();
        repos
            .threads
            .expect_get_thread_by_id()
            .returning(|id| Err(DomainError::ThreadNotFound(id.to_string())));
        repos.comments.expect_get_comments_by_thread_id().times(0);
        let ctx = context(repos);

        let err = GetThreadByIdUseCase::new(&ctx)
            .execute("thread-404")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_delete_thread_by_owner() {
        let mut repos = Repos::default();
        repos
            .threads
            .expect_get_thread_by_id()
            .returning(|_| Ok(thread("thread-123", "user-123")));
        repos
            .threads
            .expect_delete_thread_by_id()
            .withf(|id| id == "thread-123")
            .times(1)
            .returning(|_| Ok(()));
        let ctx = context(repos);

        DeleteThreadByIdUseCase::new(&ctx)
            .execute("user-123", "thread-123")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_thread_by_non_owner() {
        let mut repos = Repos::default();
        repos
            .threads
            .expect_get_thread_by_id()
            .returning(|_| Ok(thread("thread-123", "user-123")));
        repos.threads.expect_delete_thread_by_id().times(0);
        let ctx = context(repos);

        let err = DeleteThreadByIdUseCase::new(&ctx)
            .execute("not-owner", "thread-123")
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "DELETE_THREAD_USECASE.NOT_AUTHORIZED");
    }
}
