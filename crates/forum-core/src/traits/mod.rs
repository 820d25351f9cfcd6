//! Repository ports

mod repositories;

pub use repositories::{
    CommentRepository, LikeRepository, ReplyRepository, RepoResult, ThreadRepository,
};

#[cfg(any(test, feature = "testing"))]
pub use repositories::{
    MockCommentRepository, MockLikeRepository, MockReplyRepository, MockThreadRepository,
};
