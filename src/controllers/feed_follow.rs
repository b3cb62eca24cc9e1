use axum::{
    extract::{rejection::PathRejection, Path, State},
    Extension, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::feed_follow::{CreateFeedFollowRequest, FeedFollowResponse};
use crate::{
    domain::feed_follow::{FeedFollowService, FeedFollowServiceApi},
    error::{AppError, AppResult},
    infrastructure::{auth::AuthUser, http::ApiJson},
};

pub struct FeedFollowController {
    feed_follow_service: Arc<FeedFollowService>,
}

impl FeedFollowController {
    pub fn new(feed_follow_service: Arc<FeedFollowService>) -> Self {
        Self {
            feed_follow_service,
        }
    }

    /// GET /v1/feed_follows/ - List the caller's follows
    pub async fn list_feed_follows(
        State(controller): State<Arc<FeedFollowController>>,
        Extension(AuthUser(user)): Extension<AuthUser>,
    ) -> AppResult<Json<Vec<FeedFollowResponse>>> {
        let follows = controller
            .feed_follow_service
            .get_user_feed_follows(user.id)
            .await?;
        Ok(Json(follows))
    }

    /// POST /v1/feed_follows - Follow a feed
    pub async fn create_feed_follow(
        State(controller): State<Arc<FeedFollowController>>,
        Extension(AuthUser(user)): Extension<AuthUser>,
        ApiJson(request): ApiJson<CreateFeedFollowRequest>,
    ) -> AppResult<Json<FeedFollowResponse>> {
        let follow = controller
            .feed_follow_service
            .follow_feed(user.id, request)
            .await?;
        Ok(Json(follow))
    }

    /// DELETE /v1/feed_follows/{feedFollowID} - Unfollow a feed
    pub async fn delete_feed_follow(
        State(controller): State<Arc<FeedFollowController>>,
        Extension(AuthUser(user)): Extension<AuthUser>,
        feed_follow_id: Result<Path<String>, PathRejection>,
    ) -> AppResult<Json<Value>> {
        let invalid_id = || AppError::BadRequest("Invalid feed follow ID".to_string());
        // Undecodable segments (e.g. bad percent-encoding) are rejected the same way
        let Path(feed_follow_id) = feed_follow_id.map_err(|_| invalid_id())?;
        let feed_follow_id = Uuid::parse_str(&feed_follow_id).map_err(|_| invalid_id())?;

        controller
            .feed_follow_service
            .unfollow_feed(user.id, feed_follow_id)
            .await?;
        Ok(Json(json!({})))
    }
}
