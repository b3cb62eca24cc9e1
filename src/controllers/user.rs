use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::domain::user::{CreateUserRequest, UserResponse};
use crate::{
    domain::user::UserService, error::AppResult, infrastructure::auth::AuthUser,
    infrastructure::http::ApiJson,
};

pub struct UserController {
    user_service: Arc<UserService>,
}

impl UserController {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// POST /v1/users - Register a user
    pub async fn create_user(
        State(controller): State<Arc<UserController>>,
        ApiJson(request): ApiJson<CreateUserRequest>,
    ) -> AppResult<Json<UserResponse>> {
        let user = controller.user_service.create_user(request).await?;
        Ok(Json(user))
    }

    /// GET /v1/users - Get the authenticated user
    pub async fn get_me(Extension(AuthUser(user)): Extension<AuthUser>) -> Json<UserResponse> {
        Json(UserResponse::from(user))
    }
}
