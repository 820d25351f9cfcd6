//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use forum_core::entities::{Comment, Reply, Thread};

use super::responses::{
    AddedCommentResponse, AddedReplyResponse, AddedThreadResponse, CommentResponse,
    ReplyResponse, ThreadDetailResponse, ThreadSummaryResponse,
};

// ============================================================================
// Thread Mappers
// ============================================================================

impl From<&Thread> for AddedThreadResponse {
    fn from(thread: &Thread) -> Self {
        Self {
            id: thread.id().to_string(),
            title: thread.title().to_string(),
            owner: thread.owner().to_string(),
        }
    }
}

impl From<&Thread> for ThreadSummaryResponse {
    fn from(thread: &Thread) -> Self {
        Self {
            id: thread.id().to_string(),
            title: thread.title().to_string(),
            body: thread.body().to_string(),
            date: thread.date(),
            username: thread.username().map(ToString::to_string),
        }
    }
}

impl From<&Thread> for ThreadDetailResponse {
    fn from(thread: &Thread) -> Self {
        Self {
            id: thread.id().to_string(),
            title: thread.title().to_string(),
            body: thread.body().to_string(),
            date: thread.date(),
            username: thread.username().map(ToString::to_string),
            like_count: thread.like_count(),
            comments: thread.comments().iter().map(CommentResponse::from).collect(),
        }
    }
}

impl From<Thread> for ThreadDetailResponse {
    fn from(thread: Thread) -> Self {
        Self::from(&thread)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id().to_string(),
            username: comment.username().map(ToString::to_string),
            date: comment.date(),
            content: comment.content().to_string(),
            like_count: comment.like_count(),
            replies: comment.replies().iter().map(ReplyResponse::from).collect(),
        }
    }
}

impl From<&Comment> for AddedCommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id().to_string(),
            content: comment.content().to_string(),
            owner: comment.owner().to_string(),
        }
    }
}

// ============================================================================
// Reply Mappers
// ============================================================================

impl From<&Reply> for ReplyResponse {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id().to_string(),
            content: reply.content().to_string(),
            date: reply.date(),
            username: reply.username().map(ToString::to_string),
        }
    }
}

impl From<&Reply> for AddedReplyResponse {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id().to_string(),
            content: reply.content().to_string(),
            owner: reply.owner().to_string(),
        }
    }
}
