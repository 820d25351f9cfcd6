//! Service context - dependency container for use cases
//!
//! Repository ports are composed once at start-up and borrowed by every use case.

use std::sync::Arc;

use forum_core::traits::{CommentRepository, LikeRepository, ReplyRepository, ThreadRepository};
use forum_db::{
    PgCommentRepository, PgLikeRepository, PgPool, PgReplyRepository, PgThreadRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all repository ports
#[derive(Clone)]
pub struct ServiceContext {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    like_repo: Option<Arc<dyn LikeRepository>>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
        like_repo: Option<Arc<dyn LikeRepository>>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
            like_repo,
        }
    }

    /// Wire every port to its PostgreSQL adapter
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgThreadRepository::new(pool.clone())),
            Arc::new(PgCommentRepository::new(pool.clone())),
            Arc::new(PgReplyRepository::new(pool.clone())),
            Some(Arc::new(PgLikeRepository::new(pool))),
        )
    }

    pub fn thread_repo(&self) -> &dyn ThreadRepository {
        self.thread_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    /// The like repository, if one is wired
    pub fn like_repo(&self) -> Option<&dyn LikeRepository> {
        self.like_repo.as_deref()
    }

    /// The like repository, for use cases that cannot run without it
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` when no like repository is wired
    pub fn require_like_repo(&self) -> ServiceResult<&dyn LikeRepository> {
        self.like_repo()
            .ok_or_else(|| ServiceError::internal("like repository is not configured"))
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("likes_enabled", &self.like_repo.is_some())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    thread_repo: Option<Arc<dyn ThreadRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thread_repo(mut self, repo: Arc<dyn ThreadRepository>) -> Self {
        self.thread_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a required repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.thread_repo
                .ok_or_else(|| ServiceError::internal("thread_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::internal("comment_repo is required"))?,
            self.reply_repo
                .ok_or_else(|| ServiceError::internal("reply_repo is required"))?,
            self.like_repo,
        ))
    }
}
