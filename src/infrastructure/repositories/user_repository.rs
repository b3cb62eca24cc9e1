use crate::infrastructure::db::DbPool;
use crate::{domain::user::User, error::AppResult};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Find user by API key (exact, case-sensitive match)
    pub async fn find_by_api_key(&self, api_key: &str) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>(
            "SELECT id, created_at, updated_at, name, api_key FROM users WHERE api_key = $1",
        )
        .bind(api_key)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Create a new user
    pub async fn create(
        &self,
        id: Uuid,
        name: &str,
        api_key: &str,
        now: DateTime<Utc>,
    ) -> AppResult<User> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, created_at, updated_at, name, api_key)
            VALUES ($1, $2, $2, $3, $4)
            RETURNING id, created_at, updated_at, name, api_key
            "#,
        )
        .bind(id)
        .bind(now)
        .bind(name)
        .bind(api_key)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }
}
