//! PostgreSQL implementation of ThreadRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use forum_core::entities::{NewThread, Thread};
use forum_core::traits::{RepoResult, ThreadRepository};

use crate::mappers::NewThreadInsert;
use crate::models::ThreadModel;

use super::error::{map_db_error, thread_not_found};

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self, thread))]
    async fn add_thread(&self, thread: &NewThread) -> RepoResult<Thread> {
        let insert = NewThreadInsert::new(thread);

        let model = sqlx::query_as::<_, ThreadModel>(
            r#"
            INSERT INTO threads (id, title, body, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, body, owner, "createdAt", COALESCE("isDeleted", false) AS "isDeleted"
            "#,
        )
        .bind(&insert.id)
        .bind(insert.title)
        .bind(insert.body)
        .bind(insert.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        info!(thread_id = %model.id, "Thread inserted");

        Thread::try_from(model)
    }

    #[instrument(skip(self))]
    async fn get_threads(&self) -> RepoResult<Vec<Thread>> {
        let models = sqlx::query_as::<_, ThreadModel>(
            r#"
            SELECT t.id, t.title, t.body, t.owner, u.username,
                   t."createdAt", COALESCE(t."isDeleted", false) AS "isDeleted"
            FROM threads t
            LEFT JOIN users u ON u.id = t.owner
            WHERE COALESCE(t."isDeleted", false) = false
            ORDER BY t."createdAt"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Thread::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn get_thread_by_id(&self, thread_id: &str) -> RepoResult<Thread> {
        let model = sqlx::query_as::<_, ThreadModel>(
            r#"
            SELECT t.id, t.title, t.body, t.owner, u.username,
                   t."createdAt", COALESCE(t."isDeleted", false) AS "isDeleted"
            FROM threads t
            LEFT JOIN users u ON u.id = t.owner
            WHERE t.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| thread_not_found(thread_id))?;

        Thread::try_from(model)
    }

    #[instrument(skip(self))]
    async fn verify_thread_availability(&self, thread_id: &str) -> RepoResult<()> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM threads WHERE id = $1")
            .bind(thread_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        if count == 0 {
            return Err(thread_not_found(thread_id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_thread_by_id(&self, thread_id: &str) -> RepoResult<()> {
        let result = sqlx::query(r#"UPDATE threads SET "isDeleted" = true WHERE id = $1"#)
            .bind(thread_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(thread_id));
        }
        Ok(())
    }
}
