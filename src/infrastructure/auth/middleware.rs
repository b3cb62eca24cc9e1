use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{
    domain::user::User,
    error::{AppError, AppResult},
    infrastructure::repositories::UserRepository,
};

const API_KEY_SCHEME: &str = "ApiKey";

/// Authenticated caller handed to handlers after the gate has resolved it
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Extract the API key from an `Authorization: ApiKey <key>` header
pub fn parse_api_key(headers: &HeaderMap) -> AppResult<&str> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(AppError::Unauthorized(
                "no auth header included in request".to_string(),
            ))
        }
    };

    let malformed = || AppError::Unauthorized("malformed authorization header".to_string());

    let header = value.to_str().map_err(|_| malformed())?;
    let mut parts = header.split(' ');

    match (parts.next(), parts.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => Ok(key),
        _ => Err(malformed()),
    }
}

/// Resolve the caller's API key to a stored user
pub async fn authenticate(user_repo: &UserRepository, headers: &HeaderMap) -> AppResult<User> {
    let api_key = parse_api_key(headers)?;

    user_repo
        .find_by_api_key(api_key)
        .await?
        .ok_or_else(|| AppError::NotFound("Could not get user".to_string()))
}

/// Authentication middleware
pub async fn auth_middleware(
    State(user_repo): State<Arc<UserRepository>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(&user_repo, request.headers()).await?;

    request.extensions_mut().insert(AuthUser(user));

    Ok(next.run(request).await)
}
