use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum FeedServiceError {
    #[error("dependency error: {0}")]
    Dependency(AppError),
    #[error("feed already exists")]
    Conflict,
}

impl From<AppError> for FeedServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Conflict(_) => FeedServiceError::Conflict,
            _ => FeedServiceError::Dependency(err),
        }
    }
}

impl From<FeedServiceError> for AppError {
    fn from(err: FeedServiceError) -> Self {
        match err {
            FeedServiceError::Conflict => AppError::Conflict("Feed URL already exists".to_string()),
            FeedServiceError::Dependency(inner) => inner,
        }
    }
}
