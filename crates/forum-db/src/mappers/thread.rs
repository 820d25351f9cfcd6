//! Thread entity <-> model mapper

use forum_core::entities::{NewThread, Thread, ThreadPayload};
use forum_core::DomainError;

use crate::models::ThreadModel;

use super::generate_id;

impl TryFrom<ThreadModel> for Thread {
    type Error = DomainError;

    fn try_from(model: ThreadModel) -> Result<Self, Self::Error> {
        Thread::new(ThreadPayload {
            id: model.id,
            title: model.title,
            body: model.body,
            owner: model.owner,
            date: Some(model.created_at.and_utc()),
            is_deleted: model.is_deleted,
            like_count: 0,
            username: model.username,
        })
    }
}

/// Values for a thread insert, with a freshly generated id
pub struct NewThreadInsert<'a> {
    pub id: String,
    pub title: &'a str,
    pub body: &'a str,
    pub owner: &'a str,
}

impl<'a> NewThreadInsert<'a> {
    pub fn new(thread: &'a NewThread) -> Self {
        Self {
            id: generate_id("thread"),
            title: &thread.title,
            body: &thread.body,
            owner: &thread.owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use forum_core::entities::DELETED_THREAD_CONTENT;

    fn model(is_deleted: bool) -> ThreadModel {
        ThreadModel {
            id: "thread-123".to_string(),
            title: "a thread".to_string(),
            body: "its body".to_string(),
            owner: "user-123".to_string(),
            username: Some("dicoding".to_string()),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            is_deleted,
        }
    }

    #[test]
    fn test_model_to_thread() {
        let thread = Thread::try_from(model(false)).unwrap();

        assert_eq!(thread.id(), "thread-123");
        assert_eq!(thread.title(), "a thread");
        assert_eq!(thread.username(), Some("dicoding"));
        assert_eq!(thread.date().to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn test_deleted_model_is_masked() {
        let thread = Thread::try_from(model(true)).unwrap();

        assert_eq!(thread.title(), DELETED_THREAD_CONTENT);
        assert_eq!(thread.body(), DELETED_THREAD_CONTENT);
    }

    #[test]
    fn test_insert_generates_prefixed_id() {
        let new_thread = NewThread {
            title: "a thread".to_string(),
            body: "its body".to_string(),
            owner: "user-123".to_string(),
        };

        let insert = NewThreadInsert::new(&new_thread);

        assert!(insert.id.starts_with("thread-"));
        assert_eq!(insert.owner, "user-123");
    }
}
