use super::error::FeedFollowServiceError;
use crate::domain::feed_follow::{CreateFeedFollowRequest, FeedFollow, FeedFollowResponse};
use crate::infrastructure::repositories::FeedFollowRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct FeedFollowService {
    feed_follow_repo: Arc<FeedFollowRepository>,
}

impl FeedFollowService {
    pub fn new(feed_follow_repo: Arc<FeedFollowRepository>) -> Self {
        Self { feed_follow_repo }
    }
}

#[async_trait]
pub trait FeedFollowServiceApi: Send + Sync {
    async fn follow_feed(
        &self,
        user_id: Uuid,
        request: CreateFeedFollowRequest,
    ) -> Result<FeedFollowResponse, FeedFollowServiceError>;

    /// Delete a follow only if it belongs to `user_id`
    async fn unfollow_feed(
        &self,
        user_id: Uuid,
        feed_follow_id: Uuid,
    ) -> Result<(), FeedFollowServiceError>;

    async fn get_user_feed_follows(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FeedFollowResponse>, FeedFollowServiceError>;
}

#[async_trait]
impl FeedFollowServiceApi for FeedFollowService {
    async fn follow_feed(
        &self,
        user_id: Uuid,
        request: CreateFeedFollowRequest,
    ) -> Result<FeedFollowResponse, FeedFollowServiceError> {
        let now = Utc::now();
        let follow = FeedFollow {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            user_id,
            feed_id: request.feed_id,
        };

        let follow = self.feed_follow_repo.create(&follow).await?;

        Ok(FeedFollowResponse::from(follow))
    }

    async fn unfollow_feed(
        &self,
        user_id: Uuid,
        feed_follow_id: Uuid,
    ) -> Result<(), FeedFollowServiceError> {
        let deleted = self
            .feed_follow_repo
            .delete_for_user(feed_follow_id, user_id)
            .await?;

        if !deleted {
            return Err(FeedFollowServiceError::NotFound);
        }

        Ok(())
    }

    async fn get_user_feed_follows(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FeedFollowResponse>, FeedFollowServiceError> {
        let follows = self
            .feed_follow_repo
            .find_by_user(user_id)
            .await
            .map_err(FeedFollowServiceError::Listing)?;

        Ok(follows.into_iter().map(FeedFollowResponse::from).collect())
    }
}
