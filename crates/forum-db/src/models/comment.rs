//! Comment database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: String,
    pub content: String,
    pub owner: String,
    pub thread: String,
    #[sqlx(default)]
    pub username: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "isDeleted")]
    pub is_deleted: bool,
}
