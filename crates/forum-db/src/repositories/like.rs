//! PostgreSQL implementation of LikeRepository
//!
//! `thread_likes` and `comment_likes` hold one row per (owner, target).
//! Inserts skip an existing pair, and a unique violation raised by a
//! concurrent insert counts as already liked.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use forum_core::traits::{LikeRepository, RepoResult};

use crate::mappers::generate_id;

use super::error::{is_unique_violation, map_db_error, to_count};

/// Like table for one kind of target
#[derive(Debug, Clone, Copy)]
enum LikeTable {
    Thread,
    Comment,
}

impl LikeTable {
    fn id_prefix(self) -> &'static str {
        match self {
            Self::Thread => "thread_likes",
            Self::Comment => "comment_likes",
        }
    }

    fn insert_sql(self) -> &'static str {
        match self {
            Self::Thread => {
                r#"
                INSERT INTO thread_likes (id, owner, thread)
                SELECT $1, $2, $3
                WHERE NOT EXISTS (
                    SELECT 1 FROM thread_likes WHERE owner = $2 AND thread = $3
                )
                "#
            }
            Self::Comment => {
                r#"
                INSERT INTO comment_likes (id, owner, comment)
                SELECT $1, $2, $3
                WHERE NOT EXISTS (
                    SELECT 1 FROM comment_likes WHERE owner = $2 AND comment = $3
                )
                "#
            }
        }
    }

    fn delete_sql(self) -> &'static str {
        match self {
            Self::Thread => "DELETE FROM thread_likes WHERE thread = $1 AND owner = $2",
            Self::Comment => "DELETE FROM comment_likes WHERE comment = $1 AND owner = $2",
        }
    }

    fn count_sql(self) -> &'static str {
        match self {
            Self::Thread => "SELECT COUNT(id) FROM thread_likes WHERE thread = $1",
            Self::Comment => "SELECT COUNT(id) FROM comment_likes WHERE comment = $1",
        }
    }

    fn exists_sql(self) -> &'static str {
        match self {
            Self::Thread => "SELECT COUNT(1) FROM thread_likes WHERE thread = $1 AND owner = $2",
            Self::Comment => {
                "SELECT COUNT(1) FROM comment_likes WHERE comment = $1 AND owner = $2"
            }
        }
    }
}

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn like(&self, table: LikeTable, target_id: &str, user_id: &str) -> RepoResult<()> {
        let result = sqlx::query(table.insert_sql())
            .bind(generate_id(table.id_prefix()))
            .bind(user_id)
            .bind(target_id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => {
                debug!(?table, target_id, "Like already present");
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => {
                debug!(?table, target_id, "Concurrent like rejected by constraint");
                Ok(())
            }
            Err(e) => Err(map_db_error(e)),
        }
    }

    async fn dislike(&self, table: LikeTable, target_id: &str, user_id: &str) -> RepoResult<()> {
        sqlx::query(table.delete_sql())
            .bind(target_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    async fn count(&self, table: LikeTable, target_id: &str) -> RepoResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(table.count_sql())
            .bind(target_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        to_count(count)
    }

    async fn is_liked(&self, table: LikeTable, target_id: &str, user_id: &str) -> RepoResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(table.exists_sql())
            .bind(target_id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count > 0)
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn like_thread(&self, thread_id: &str, user_id: &str) -> RepoResult<()> {
        self.like(LikeTable::Thread, thread_id, user_id).await
    }

    #[instrument(skip(self))]
    async fn dislike_thread(&self, thread_id: &str, user_id: &str) -> RepoResult<()> {
        self.dislike(LikeTable::Thread, thread_id, user_id).await
    }

    #[instrument(skip(self))]
    async fn get_thread_likes_count(&self, thread_id: &str) -> RepoResult<u64> {
        self.count(LikeTable::Thread, thread_id).await
    }

    #[instrument(skip(self))]
    async fn check_is_liked_thread(&self, thread_id: &str, user_id: &str) -> RepoResult<bool> {
        self.is_liked(LikeTable::Thread, thread_id, user_id).await
    }

    #[instrument(skip(self))]
    async fn like_comment(&self, comment_id: &str, user_id: &str) -> RepoResult<()> {
        self.like(LikeTable::Comment, comment_id, user_id).await
    }

    #[instrument(skip(self))]
    async fn dislike_comment(&self, comment_id: &str, user_id: &str) -> RepoResult<()> {
        self.dislike(LikeTable::Comment, comment_id, user_id).await
    }

    #[instrument(skip(self))]
    async fn get_comment_likes_count(&self, comment_id: &str) -> RepoResult<u64> {
        self.count(LikeTable::Comment, comment_id).await
    }

    #[instrument(skip(self))]
    async fn check_is_liked_comment(&self, comment_id: &str, user_id: &str) -> RepoResult<bool> {
        self.is_liked(LikeTable::Comment, comment_id, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_target_their_table() {
        for table in [LikeTable::Thread, LikeTable::Comment] {
            let name = table.id_prefix();
            assert!(table.insert_sql().contains(&format!("INSERT INTO {name}")));
            assert!(table.insert_sql().contains("WHERE NOT EXISTS"));
            assert!(table.delete_sql().contains(name));
            assert!(table.count_sql().contains(name));
            assert!(table.exists_sql().contains(name));
        }
    }
}
