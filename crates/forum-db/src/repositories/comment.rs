//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use forum_core::entities::{Comment, NewComment};
use forum_core::traits::{CommentRepository, RepoResult};

use crate::mappers::NewCommentInsert;
use crate::models::CommentModel;

use super::error::{comment_not_found, map_db_error};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, comment), fields(thread_id = %comment.thread))]
    async fn add_comment(&self, comment: &NewComment) -> RepoResult<Comment> {
        let insert = NewCommentInsert::new(comment);

        let model = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (id, content, owner, thread)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner, thread, "createdAt", COALESCE("isDeleted", false) AS "isDeleted"
            "#,
        )
        .bind(&insert.id)
        .bind(insert.content)
        .bind(insert.owner)
        .bind(insert.thread)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        info!(comment_id = %model.id, "Comment inserted");

        Comment::try_from(model)
    }

    #[instrument(skip(self))]
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<Comment>> {
        let models = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT c.id, c.content, c.owner, c.thread, u.username,
                   c."createdAt", COALESCE(c."isDeleted", false) AS "isDeleted"
            FROM comments c
            LEFT JOIN users u ON u.id = c.owner
            WHERE c.thread = $1
            ORDER BY c."createdAt"
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Comment::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn get_comment_by_id(&self, comment_id: &str) -> RepoResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT c.id, c.content, c.owner, c.thread, u.username,
                   c."createdAt", COALESCE(c."isDeleted", false) AS "isDeleted"
            FROM comments c
            LEFT JOIN users u ON u.id = c.owner
            WHERE c.id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| comment_not_found(comment_id))?;

        Comment::try_from(model)
    }

    #[instrument(skip(self))]
    async fn verify_comment_availability(&self, comment_id: &str) -> RepoResult<()> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        if count == 0 {
            return Err(comment_not_found(comment_id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_comment_by_id(&self, comment_id: &str) -> RepoResult<()> {
        let result = sqlx::query(r#"UPDATE comments SET "isDeleted" = true WHERE id = $1"#)
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(comment_id));
        }
        Ok(())
    }
}
