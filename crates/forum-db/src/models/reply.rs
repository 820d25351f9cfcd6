//! Reply database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for replies table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: String,
    pub content: String,
    pub owner: String,
    /// Parent comment id
    pub parent: String,
    #[sqlx(default)]
    pub username: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "isDeleted")]
    pub is_deleted: bool,
}
