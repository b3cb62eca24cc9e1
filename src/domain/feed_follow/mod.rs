pub mod error;
pub mod model;
pub mod service;

pub use error::FeedFollowServiceError;
pub use model::FeedFollow;
pub use service::{FeedFollowService, FeedFollowServiceApi};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedFollowResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub feed_id: Uuid,
}

/// Request to follow an existing feed
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFeedFollowRequest {
    pub feed_id: Uuid,
}

impl From<FeedFollow> for FeedFollowResponse {
    fn from(follow: FeedFollow) -> Self {
        Self {
            id: follow.id,
            created_at: follow.created_at,
            updated_at: follow.updated_at,
            user_id: follow.user_id,
            feed_id: follow.feed_id,
        }
    }
}
