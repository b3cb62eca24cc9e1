pub mod feed;
pub mod feed_follow;
pub mod health;
pub mod user;
