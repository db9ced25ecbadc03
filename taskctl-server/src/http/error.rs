//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": ..., "message": ...}` JSON bodies with
//! the matching status code. Database details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Undecodable body or malformed path parameter (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(ValidationError::InvalidBody { detail }) => {
                tracing::warn!(%detail, "rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": "invalid_request",
                        "message": "Invalid task parameters"
                    }),
                )
            }
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_request",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, %id, "lookup missed");
                (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": "not_found",
                        "message": format!("Couldn't find specified {}", resource)
                    }),
                )
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
