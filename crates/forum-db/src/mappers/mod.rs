//! Model to entity mappers
//!
//! Rows are run through the entity constructors, so a soft-deleted row comes
//! back masked and a malformed row surfaces as a validation error.

mod comment;
mod reply;
mod thread;

pub use comment::NewCommentInsert;
pub use reply::NewReplyInsert;
pub use thread::NewThreadInsert;

use uuid::Uuid;

/// Generate a prefixed row id, e.g. `thread-<uuid>`
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}
