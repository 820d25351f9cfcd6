//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method has a default body that fails
//! with `METHOD_NOT_IMPLEMENTED`, so an adapter that forgets to override a
//! method surfaces the gap instead of silently succeeding.

use async_trait::async_trait;

use crate::entities::{Comment, NewComment, NewReply, NewThread, Reply, Thread};
use crate::error::{DomainError, RepositoryKind};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

fn not_implemented<T>(repository: RepositoryKind) -> RepoResult<T> {
    Err(DomainError::MethodNotImplemented { repository })
}

// ============================================================================
// Thread Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a new thread and return it as stored
    async fn add_thread(&self, _thread: &NewThread) -> RepoResult<Thread> {
        not_implemented(RepositoryKind::Thread)
    }

    /// List threads that are not soft-deleted
    async fn get_threads(&self) -> RepoResult<Vec<Thread>> {
        not_implemented(RepositoryKind::Thread)
    }

    /// Fetch a thread; `ThreadNotFound` if absent
    async fn get_thread_by_id(&self, _thread_id: &str) -> RepoResult<Thread> {
        not_implemented(RepositoryKind::Thread)
    }

    /// Existence check only; `ThreadNotFound` if absent
    async fn verify_thread_availability(&self, _thread_id: &str) -> RepoResult<()> {
        not_implemented(RepositoryKind::Thread)
    }

    /// Soft delete; `ThreadNotFound` if absent
    async fn delete_thread_by_id(&self, _thread_id: &str) -> RepoResult<()> {
        not_implemented(RepositoryKind::Thread)
    }
}

// ============================================================================
// Comment Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment and return it as stored
    async fn add_comment(&self, _comment: &NewComment) -> RepoResult<Comment> {
        not_implemented(RepositoryKind::Comment)
    }

    /// Comments of a thread, oldest first
    async fn get_comments_by_thread_id(&self, _thread_id: &str) -> RepoResult<Vec<Comment>> {
        not_implemented(RepositoryKind::Comment)
    }

    /// Fetch a comment; `CommentNotFound` if absent
    async fn get_comment_by_id(&self, _comment_id: &str) -> RepoResult<Comment> {
        not_implemented(RepositoryKind::Comment)
    }

    /// Existence check only; `CommentNotFound` if absent
    async fn verify_comment_availability(&self, _comment_id: &str) -> RepoResult<()> {
        not_implemented(RepositoryKind::Comment)
    }

    /// Soft delete; `CommentNotFound` if absent
    async fn delete_comment_by_id(&self, _comment_id: &str) -> RepoResult<()> {
        not_implemented(RepositoryKind::Comment)
    }
}

// ============================================================================
// Reply Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Persist a new reply and return it as stored
    async fn add_reply(&self, _reply: &NewReply) -> RepoResult<Reply> {
        not_implemented(RepositoryKind::Reply)
    }

    /// Replies to a comment, oldest first
    async fn get_replies_by_comment_id(&self, _comment_id: &str) -> RepoResult<Vec<Reply>> {
        not_implemented(RepositoryKind::Reply)
    }

    /// Fetch a reply; `ReplyNotFound` if absent
    async fn get_reply_by_id(&self, _reply_id: &str) -> RepoResult<Reply> {
        not_implemented(RepositoryKind::Reply)
    }

    /// Existence check only; `ReplyNotFound` if absent
    async fn verify_reply_availability(&self, _reply_id: &str) -> RepoResult<()> {
        not_implemented(RepositoryKind::Reply)
    }

    /// Soft delete; `ReplyNotFound` if absent
    async fn delete_reply_by_id(&self, _reply_id: &str) -> RepoResult<()> {
        not_implemented(RepositoryKind::Reply)
    }
}

// ============================================================================
// Like Repository
// ============================================================================

/// Like rows keyed by (owner, target). Symmetric for threads and comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn like_thread(&self, _thread_id: &str, _user_id: &str) -> RepoResult<()> {
        not_implemented(RepositoryKind::Like)
    }

    async fn dislike_thread(&self, _thread_id: &str, _user_id: &str) -> RepoResult<()> {
        not_implemented(RepositoryKind::Like)
    }

    async fn get_thread_likes_count(&self, _thread_id: &str) -> RepoResult<u64> {
        not_implemented(RepositoryKind::Like)
    }

    async fn check_is_liked_thread(&self, _thread_id: &str, _user_id: &str) -> RepoResult<bool> {
        not_implemented(RepositoryKind::Like)
    }

    async fn like_comment(&self, _comment_id: &str, _user_id: &str) -> RepoResult<()> {
        not_implemented(RepositoryKind::Like)
    }

    async fn dislike_comment(&self, _comment_id: &str, _user_id: &str) -> RepoResult<()> {
        not_implemented(RepositoryKind::Like)
    }

    async fn get_comment_likes_count(&self, _comment_id: &str) -> RepoResult<u64> {
        not_implemented(RepositoryKind::Like)
    }

    async fn check_is_liked_comment(&self, _comment_id: &str, _user_id: &str) -> RepoResult<bool> {
        not_implemented(RepositoryKind::Like)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    #[async_trait]
    impl ThreadRepository for Bare {}

    #[async_trait]
    impl CommentRepository for Bare {}

    #[async_trait]
    impl ReplyRepository for Bare {}

    #[async_trait]
    impl LikeRepository for Bare {}

    fn assert_not_implemented<T: std::fmt::Debug>(result: RepoResult<T>, code: &str) {
        assert_eq!(result.unwrap_err().code(), code);
    }

    #[tokio::test]
    async fn test_thread_repository_defaults() {
        const CODE: &str = "THREAD_REPOSITORY.METHOD_NOT_IMPLEMENTED";
        let repo = Bare;
        let new_thread = NewThread {
            title: "title".to_string(),
            body: "body".to_string(),
            owner: "user-123".to_string(),
        };

        assert_not_implemented(repo.add_thread(&new_thread).await, CODE);
        assert_not_implemented(repo.get_threads().await, CODE);
        assert_not_implemented(repo.get_thread_by_id("thread-123").await, CODE);
        assert_not_implemented(repo.verify_thread_availability("thread-123").await, CODE);
        assert_not_implemented(repo.delete_thread_by_id("thread-123").await, CODE);
    }

    #[tokio::test]
    async fn test_comment_repository_defaults() {
        const CODE: &str = "COMMENT_REPOSITORY.METHOD_NOT_IMPLEMENTED";
        let repo = Bare;
        let new_comment = NewComment {
            content: "content".to_string(),
            owner: "user-123".to_string(),
            thread: "thread-123".to_string(),
        };

        assert_not_implemented(repo.add_comment(&new_comment).await, CODE);
        assert_not_implemented(repo.get_comments_by_thread_id("thread-123").await, CODE);
        assert_not_implemented(repo.get_comment_by_id("comment-123").await, CODE);
        assert_not_implemented(repo.verify_comment_availability("comment-123").await, CODE);
        assert_not_implemented(repo.delete_comment_by_id("comment-123").await, CODE);
    }

    #[tokio::test]
    async fn test_reply_repository_defaults() {
        const CODE: &str = "REPLY_REPOSITORY.METHOD_NOT_IMPLEMENTED";
        let repo = Bare;
        let new_reply = NewReply {
            content: "content".to_string(),
            owner: "user-123".to_string(),
            parent: "comment-123".to_string(),
        };

        assert_not_implemented(repo.add_reply(&new_reply).await, CODE);
        assert_not_implemented(repo.get_replies_by_comment_id("comment-123").await, CODE);
        assert_not_implemented(repo.get_reply_by_id("reply-123").await, CODE);
        assert_not_implemented(repo.verify_reply_availability("reply-123").await, CODE);
        assert_not_implemented(repo.delete_reply_by_id("reply-123").await, CODE);
    }

    #[tokio::test]
    async fn test_like_repository_defaults() {
        const CODE: &str = "LIKE_REPOSITORY.METHOD_NOT_IMPLEMENTED";
        let repo = Bare;

        assert_not_implemented(repo.like_thread("thread-123", "user-123").await, CODE);
        assert_not_implemented(repo.dislike_thread("thread-123", "user-123").await, CODE);
        assert_not_implemented(repo.get_thread_likes_count("thread-123").await, CODE);
        assert_not_implemented(repo.check_is_liked_thread("thread-123", "user-123").await, CODE);
        assert_not_implemented(repo.like_comment("comment-123", "user-123").await, CODE);
        assert_not_implemented(repo.dislike_comment("comment-123", "user-123").await, CODE);
        assert_not_implemented(repo.get_comment_likes_count("comment-123").await, CODE);
        assert_not_implemented(repo.check_is_liked_comment("comment-123", "user-123").await, CODE);
    }

    #[test]
    fn test_ports_are_object_safe() {
        fn assert_dyn<T: ?Sized + Send + Sync>() {}
        assert_dyn::<dyn ThreadRepository>();
        assert_dyn::<dyn CommentRepository>();
        assert_dyn::<dyn ReplyRepository>();
        assert_dyn::<dyn LikeRepository>();
    }
}
