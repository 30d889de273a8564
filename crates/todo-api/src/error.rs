//! API error types and handling

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use todo_application::ApplicationError;

use crate::models::ErrorResponse;

/// Message returned for every failure the caller cannot act on
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Referenced item does not exist
    #[error("{0}")]
    NotFound(String),

    /// Request rejected by validation or a business rule
    #[error("{0}")]
    BadRequest(String),

    /// Anything else; detail is logged, never returned
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match &err {
            ApplicationError::TodoItemNotFound(_) => ApiError::NotFound(err.message()),
            ApplicationError::ValidationFailed(_) | ApplicationError::OperationNotAllowed(_) => {
                ApiError::BadRequest(err.message())
            }
            ApplicationError::RepositoryError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) => msg,
            ApiError::Internal(detail) => {
                error!(error = %detail, "Unhandled error while processing request");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
