use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::domain::feed::{CreateFeedRequest, CreateFeedResponse, FeedResponse};
use crate::{
    domain::feed::{FeedService, FeedServiceApi},
    error::AppResult,
    infrastructure::{auth::AuthUser, http::ApiJson},
};

pub struct FeedController {
    feed_service: Arc<FeedService>,
}

impl FeedController {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    /// GET /v1/feeds - List all feeds
    pub async fn list_feeds(
        State(controller): State<Arc<FeedController>>,
    ) -> AppResult<Json<Vec<FeedResponse>>> {
        let feeds = controller.feed_service.list_feeds().await?;
        Ok(Json(feeds))
    }

    /// POST /v1/feeds - Create a feed and follow it
    pub async fn create_feed(
        State(controller): State<Arc<FeedController>>,
        Extension(AuthUser(user)): Extension<AuthUser>,
        ApiJson(request): ApiJson<CreateFeedRequest>,
    ) -> AppResult<Json<CreateFeedResponse>> {
        let response = controller.feed_service.create_feed(user.id, request).await?;
        Ok(Json(response))
    }
}
