use super::map_insert_error;
use crate::infrastructure::db::DbPool;
use crate::{domain::feed_follow::FeedFollow, error::AppResult};
use sqlx::PgExecutor;
use std::sync::Arc;
use uuid::Uuid;

pub struct FeedFollowRepository {
    pool: Arc<DbPool>,
}

impl FeedFollowRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Insert a follow through any executor, so it can join an open transaction
    pub async fn insert<'e, E>(executor: E, follow: &FeedFollow) -> AppResult<FeedFollow>
    where
        E: PgExecutor<'e>,
    {
        let follow = sqlx::query_as::<_, FeedFollow>(
            r#"
            INSERT INTO feed_follows (id, created_at, updated_at, user_id, feed_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at, updated_at, user_id, feed_id
            "#,
        )
        .bind(follow.id)
        .bind(follow.created_at)
        .bind(follow.updated_at)
        .bind(follow.user_id)
        .bind(follow.feed_id)
        .fetch_one(executor)
        .await
        .map_err(|e| map_insert_error(e, "Feed already followed", "Feed not found"))?;

        Ok(follow)
    }

    pub async fn create(&self, follow: &FeedFollow) -> AppResult<FeedFollow> {
        Self::insert(self.pool.as_ref(), follow).await
    }

    /// Get all follows owned by a user, oldest first
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<FeedFollow>> {
        let pool = self.pool.as_ref();
        let follows = sqlx::query_as::<_, FeedFollow>(
            r#"
            SELECT id, created_at, updated_at, user_id, feed_id
            FROM feed_follows
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(follows)
    }

    /// Delete a follow, scoped to its owner. Returns false when nothing matched.
    pub async fn delete_for_user(&self, feed_follow_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM feed_follows
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(feed_follow_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
