pub mod feed_follow_repository;
pub mod feed_repository;
pub mod user_repository;

pub use feed_follow_repository::FeedFollowRepository;
pub use feed_repository::FeedRepository;
pub use user_repository::UserRepository;

use crate::error::AppError;

/// Translate constraint violations on insert into the matching client error
pub(crate) fn map_insert_error(e: sqlx::Error, conflict: &str, missing: &str) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return AppError::Conflict(conflict.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return AppError::NotFound(missing.to_string());
        }
    }
    AppError::Database(e)
}
