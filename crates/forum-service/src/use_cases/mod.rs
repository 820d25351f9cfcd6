//! Use cases
//!
//! Each use case borrows the `ServiceContext` and exposes a single async
//! `execute`. Ancestor availability is always checked before anything else.

pub mod comments;
pub mod context;
pub mod error;
pub mod likes;
pub mod replies;
pub mod threads;

pub use comments::{AddCommentUseCase, CommentTarget, DeleteCommentByIdUseCase};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use likes::{LikeCommentUseCase, LikeThreadUseCase, LikeToggle};
pub use replies::{AddReplyUseCase, DeleteReplyByIdUseCase, ReplyTarget};
pub use threads::{
    AddThreadUseCase, DeleteThreadByIdUseCase, GetThreadByIdUseCase, GetThreadsUseCase,
};
