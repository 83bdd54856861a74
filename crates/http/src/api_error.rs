//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and status code.
//! Handlers return `Result<T, ApiError>` instead of bare `StatusCode`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use homesense_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: missing parameters or too many devices.
    BadRequest(String),
    /// 403 Forbidden: password did not match.
    Forbidden(String),
    /// 404 Not Found: a requested device has no reading.
    NotFound(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.into())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(_) | ServiceError::TooManyDevices { .. } => {
                tracing::debug!(detail = %err.detail(), "rejected request");
                Self::BadRequest(err.to_string())
            },
            ServiceError::Unauthorized => Self::Forbidden(err.to_string()),
            ServiceError::NotFound { .. } => Self::NotFound(err.to_string()),
            ServiceError::Storage(_) | ServiceError::Config(_) => Self::Internal(err.into()),
        }
    }
}
