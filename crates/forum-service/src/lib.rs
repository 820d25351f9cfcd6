//! # forum-service
//!
//! Application layer containing use cases, payload validation, and DTOs.

pub mod bootstrap;
pub mod dto;
pub mod use_cases;
pub mod validation;

pub use use_cases::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, CommentTarget,
    DeleteCommentByIdUseCase, DeleteReplyByIdUseCase, DeleteThreadByIdUseCase,
    GetThreadByIdUseCase, GetThreadsUseCase, LikeCommentUseCase, LikeThreadUseCase, LikeToggle,
    ReplyTarget, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
pub use bootstrap::init_context;
pub use validation::validate_payload;
