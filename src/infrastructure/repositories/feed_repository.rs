use super::{map_insert_error, FeedFollowRepository};
use crate::infrastructure::db::DbPool;
use crate::{
    domain::{feed::Feed, feed_follow::FeedFollow},
    error::AppResult,
};
use std::sync::Arc;

pub struct FeedRepository {
    pool: Arc<DbPool>,
}

impl FeedRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Get every feed, oldest first
    pub async fn find_all(&self) -> AppResult<Vec<Feed>> {
        let pool = self.pool.as_ref();
        let feeds = sqlx::query_as::<_, Feed>(
            r#"
            SELECT id, created_at, updated_at, name, url, user_id
            FROM feeds
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(feeds)
    }

    /// Insert a feed and its creator's follow in a single transaction.
    ///
    /// Either both rows are committed or neither is.
    pub async fn create_with_follow(
        &self,
        feed: &Feed,
        follow: &FeedFollow,
    ) -> AppResult<(Feed, FeedFollow)> {
        let mut tx = self.pool.begin().await?;

        let feed = sqlx::query_as::<_, Feed>(
            r#"
            INSERT INTO feeds (id, created_at, updated_at, name, url, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, created_at, updated_at, name, url, user_id
            "#,
        )
        .bind(feed.id)
        .bind(feed.created_at)
        .bind(feed.updated_at)
        .bind(&feed.name)
        .bind(&feed.url)
        .bind(feed.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, "Feed URL already exists", "User not found"))?;

        let follow = FeedFollowRepository::insert(&mut *tx, follow).await?;

        tx.commit().await?;

        Ok((feed, follow))
    }
}
