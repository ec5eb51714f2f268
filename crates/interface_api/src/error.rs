//! API error handling
//!
//! Every error leaves the API as `{ "error": CODE, "message": ... }` where
//! CODE is the stable machine-readable code clients branch on.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use app_services::ServiceError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Maps a service error code to its HTTP status class
fn status_for_code(code: &str) -> StatusCode {
    match code {
        "CLAIM_NOT_FOUND" | "EDITOR_NOT_FOUND" | "USER_NOT_FOUND" | "NOT_FOUND" => {
            StatusCode::NOT_FOUND
        }
        "INVALID_EMAIL" | "INVALID_NAME" | "VALIDATION_FAILED" => StatusCode::UNPROCESSABLE_ENTITY,
        "INTERNAL_ERROR" => StatusCode::INTERNAL_SERVER_ERROR,
        // Workflow rule violations: the request was well-formed but the
        // desk's current state forbids it
        _ => StatusCode::CONFLICT,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Service(err) => (status_for_code(err.code()), err.code(), err.to_string()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Unauthorized".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg.clone(),
            ),
        };

        let body = ErrorResponse {
            error: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
