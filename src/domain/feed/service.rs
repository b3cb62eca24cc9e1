use super::error::FeedServiceError;
use crate::domain::feed::{CreateFeedRequest, CreateFeedResponse, Feed, FeedResponse};
use crate::domain::feed_follow::{FeedFollow, FeedFollowResponse};
use crate::infrastructure::repositories::FeedRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct FeedService {
    feed_repo: Arc<FeedRepository>,
}

impl FeedService {
    pub fn new(feed_repo: Arc<FeedRepository>) -> Self {
        Self { feed_repo }
    }
}

#[async_trait]
pub trait FeedServiceApi: Send + Sync {
    async fn list_feeds(&self) -> Result<Vec<FeedResponse>, FeedServiceError>;

    /// Register a feed owned by `user_id` and follow it on the owner's behalf
    async fn create_feed(
        &self,
        user_id: Uuid,
        request: CreateFeedRequest,
    ) -> Result<CreateFeedResponse, FeedServiceError>;
}

#[async_trait]
impl FeedServiceApi for FeedService {
    async fn list_feeds(&self) -> Result<Vec<FeedResponse>, FeedServiceError> {
        let feeds = self.feed_repo.find_all().await?;
        Ok(feeds.into_iter().map(FeedResponse::from).collect())
    }

    async fn create_feed(
        &self,
        user_id: Uuid,
        request: CreateFeedRequest,
    ) -> Result<CreateFeedResponse, FeedServiceError> {
        let now = Utc::now();
        let feed = Feed {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: request.name,
            url: request.url,
            user_id,
        };
        let follow = FeedFollow {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            user_id,
            feed_id: feed.id,
        };

        let (feed, follow) = self.feed_repo.create_with_follow(&feed, &follow).await?;

        tracing::info!(feed_id = %feed.id, user_id = %user_id, "Feed created");

        Ok(CreateFeedResponse {
            feed: FeedResponse::from(feed),
            feed_follow: FeedFollowResponse::from(follow),
        })
    }
}
