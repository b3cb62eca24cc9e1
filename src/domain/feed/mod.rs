pub mod error;
pub mod model;
pub mod service;

pub use error::FeedServiceError;
pub use model::Feed;
pub use service::{FeedService, FeedServiceApi};

use crate::domain::feed_follow::FeedFollowResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for feed endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub url: String,
    pub user_id: Uuid,
}

/// Request to register a new feed
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFeedRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A newly registered feed together with its creator's follow
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFeedResponse {
    pub feed: FeedResponse,
    pub feed_follow: FeedFollowResponse,
}

impl From<Feed> for FeedResponse {
    fn from(feed: Feed) -> Self {
        Self {
            id: feed.id,
            created_at: feed.created_at,
            updated_at: feed.updated_at,
            name: feed.name,
            url: feed.url,
            user_id: feed.user_id,
        }
    }
}
