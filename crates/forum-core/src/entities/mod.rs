//! Domain entities - core business objects

mod comment;
mod payload;
mod reply;
mod thread;

pub use comment::{Comment, CommentPayload, NewComment, DELETED_COMMENT_CONTENT};
pub use reply::{NewReply, Reply, ReplyPayload, DELETED_REPLY_CONTENT};
pub use thread::{NewThread, Thread, ThreadPayload, DELETED_THREAD_CONTENT};
