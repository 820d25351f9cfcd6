//! # forum-core
//!
//! Domain layer containing entities, domain errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CommentPayload, NewComment, NewReply, NewThread, Reply, ReplyPayload, Thread,
    ThreadPayload,
};
pub use error::{DomainError, DomainResult, EntityKind, GuardedAction, RepositoryKind};
pub use traits::{CommentRepository, LikeRepository, ReplyRepository, RepoResult, ThreadRepository};
