use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures surfaced by route handlers.
///
/// Every storage rejection — uniqueness violation, unknown reference —
/// maps to a single undifferentiated 400 whose body carries the storage
/// message verbatim. A credential mismatch alone is 401, plain text.
/// Anything else is a 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Storage(#[from] anyhow::Error),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("internal error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Storage(err) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
            ApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response()
            }
            ApiError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}

/// spawn_blocking join failures take the 500 path.
pub(crate) fn join_error(err: tokio::task::JoinError) -> ApiError {
    error!("spawn_blocking join error: {}", err);
    ApiError::Internal
}
