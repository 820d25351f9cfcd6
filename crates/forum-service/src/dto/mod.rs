//! Data transfer objects for use case payloads and read models
//!
//! This module provides:
//! - Request DTOs with validation for incoming payloads
//! - Response DTOs for serializing results
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{AddCommentRequest, AddReplyRequest, AddThreadRequest};

pub use responses::{
    AddedCommentResponse, AddedReplyResponse, AddedThreadResponse, CommentResponse,
    ReplyResponse, ThreadDetailResponse, ThreadSummaryResponse,
};
