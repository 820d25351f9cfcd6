//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use forum_core::entities::{NewReply, Reply};
use forum_core::traits::{ReplyRepository, RepoResult};

use crate::mappers::NewReplyInsert;
use crate::models::ReplyModel;

use super::error::{map_db_error, reply_not_found};

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self, reply), fields(comment_id = %reply.parent))]
    async fn add_reply(&self, reply: &NewReply) -> RepoResult<Reply> {
        let insert = NewReplyInsert::new(reply);

        let model = sqlx::query_as::<_, ReplyModel>(
            r#"
            INSERT INTO replies (id, content, owner, parent)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner, parent, "createdAt", COALESCE("isDeleted", false) AS "isDeleted"
            "#,
        )
        .bind(&insert.id)
        .bind(insert.content)
        .bind(insert.owner)
        .bind(insert.parent)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        info!(reply_id = %model.id, "Reply inserted");

        Reply::try_from(model)
    }

    #[instrument(skip(self))]
    async fn get_replies_by_comment_id(&self, comment_id: &str) -> RepoResult<Vec<Reply>> {
        let models = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT r.id, r.content, r.owner, r.parent, u.username,
                   r."createdAt", COALESCE(r."isDeleted", false) AS "isDeleted"
            FROM replies r
            LEFT JOIN users u ON u.id = r.owner
            WHERE r.parent = $1
            ORDER BY r."createdAt"
            "#,
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Reply::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn get_reply_by_id(&self, reply_id: &str) -> RepoResult<Reply> {
        let model = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT r.id, r.content, r.owner, r.parent, u.username,
                   r."createdAt", COALESCE(r."isDeleted", false) AS "isDeleted"
            FROM replies r
            LEFT JOIN users u ON u.id = r.owner
            WHERE r.id = $1
            "#,
        )
        .bind(reply_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| reply_not_found(reply_id))?;

        Reply::try_from(model)
    }

    #[instrument(skip(self))]
    async fn verify_reply_availability(&self, reply_id: &str) -> RepoResult<()> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM replies WHERE id = $1")
            .bind(reply_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        if count == 0 {
            return Err(reply_not_found(reply_id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_reply_by_id(&self, reply_id: &str) -> RepoResult<()> {
        let result = sqlx::query(r#"UPDATE replies SET "isDeleted" = true WHERE id = $1"#)
            .bind(reply_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found(reply_id));
        }
        Ok(())
    }
}
