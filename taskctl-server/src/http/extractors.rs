//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{TaskId, ValidationError};

/// Extract and parse a task id from the path
pub struct ValidTaskId(pub TaskId);

impl<S> FromRequestParts<S> for ValidTaskId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "task_id",
                    reason: "invalid path segment",
                })
            })?;

        Ok(Self(id.parse()?))
    }
}

/// JSON body whose rejections render as [`ApiError`] instead of axum's
/// plain-text 415/422 responses.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::InvalidBody {
                detail: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}
