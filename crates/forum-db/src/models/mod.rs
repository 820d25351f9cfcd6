//! Database models - SQLx-compatible structs for PostgreSQL tables
//!
//! Column names follow the forum schema (`"createdAt"`, `"isDeleted"`).
//! `username` is joined from `users` and absent on `RETURNING` rows.

mod comment;
mod reply;
mod thread;

pub use comment::CommentModel;
pub use reply::ReplyModel;
pub use thread::ThreadModel;
