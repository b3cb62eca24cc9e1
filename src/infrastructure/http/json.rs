use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body that reports decode failures as `{"error": ...}` bodies.
///
/// Unlike `axum::Json` it does not insist on a `Content-Type` header, and only the
/// first JSON value of the body is read; anything after it is ignored. A body that
/// fails to decode is a 500 `Could not decode parameters`.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read request body");
            decode_error()
        })?;

        decode_first(&bytes).map(ApiJson)
    }
}

/// Decode the first JSON value in `bytes`. An empty body is an error.
pub fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    match serde_json::Deserializer::from_slice(bytes)
        .into_iter::<T>()
        .next()
    {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Failed to decode request body");
            Err(decode_error())
        }
        None => {
            tracing::warn!("Request body is empty");
            Err(decode_error())
        }
    }
}

fn decode_error() -> AppError {
    AppError::Internal("Could not decode parameters".to_string())
}
