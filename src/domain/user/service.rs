use super::{error::UserServiceError, generate_api_key, CreateUserRequest, UserResponse};
use crate::infrastructure::repositories::UserRepository;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Register a new user with a freshly issued API key
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<UserResponse, UserServiceError> {
        let now = Utc::now();
        let user = self
            .user_repo
            .create(Uuid::new_v4(), &request.name, &generate_api_key(), now)
            .await?;

        tracing::info!(user_id = %user.id, "User created");

        Ok(UserResponse::from(user))
    }
}
