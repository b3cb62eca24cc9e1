use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum FeedFollowServiceError {
    #[error("dependency error: {0}")]
    Dependency(AppError),
    /// Listing failed; reported to clients as a bad request
    #[error("could not list feed follows: {0}")]
    Listing(AppError),
    #[error("feed not found")]
    FeedNotFound,
    #[error("feed follow not found")]
    NotFound,
    #[error("feed already followed")]
    Conflict,
}

impl From<AppError> for FeedFollowServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => FeedFollowServiceError::FeedNotFound,
            AppError::Conflict(_) => FeedFollowServiceError::Conflict,
            _ => FeedFollowServiceError::Dependency(err),
        }
    }
}

impl From<FeedFollowServiceError> for AppError {
    fn from(err: FeedFollowServiceError) -> Self {
        match err {
            FeedFollowServiceError::FeedNotFound => AppError::NotFound("Feed not found".to_string()),
            FeedFollowServiceError::NotFound => {
                AppError::NotFound("Feed follow not found".to_string())
            }
            FeedFollowServiceError::Conflict => {
                AppError::Conflict("Feed already followed".to_string())
            }
            FeedFollowServiceError::Listing(_) => {
                AppError::BadRequest("Could not get feed follows".to_string())
            }
            FeedFollowServiceError::Dependency(inner) => inner,
        }
    }
}
