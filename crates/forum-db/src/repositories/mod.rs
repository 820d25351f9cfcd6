//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod like;
mod reply;
mod thread;

pub use comment::PgCommentRepository;
pub use like::PgLikeRepository;
pub use reply::PgReplyRepository;
pub use thread::PgThreadRepository;
