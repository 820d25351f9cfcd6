//! Thread database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for threads table
#[derive(Debug, Clone, FromRow)]
pub struct ThreadModel {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
    #[sqlx(default)]
    pub username: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "isDeleted")]
    pub is_deleted: bool,
}
