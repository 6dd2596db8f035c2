//! # HTTP Errors
//!
//! Translation of registry errors into status codes and JSON error bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::model::FieldViolation;
use crate::user_actor::UserError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Message returned for any failure the client cannot act on.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Registry outcome (not found, conflict, validation, actor failure)
    #[error(transparent)]
    User(#[from] UserError),

    /// Malformed path, query or body
    #[error("{0}")]
    BadRequest(String),

    /// Caught at the top-level boundary
    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::User(UserError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::User(UserError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::User(UserError::AlreadyExists(_)) => StatusCode::CONFLICT,
            ApiError::User(UserError::ActorCommunicationError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: u16,
    /// Per-field problems, only present on validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let code = err.status_code().as_u16();
        match err {
            ApiError::User(UserError::Validation(violations)) => Self {
                message: "One or more validation errors occurred.".to_string(),
                code,
                errors: Some(violations),
            },
            ApiError::User(UserError::ActorCommunicationError(_)) | ApiError::Internal => Self {
                message: INTERNAL_ERROR_MESSAGE.to_string(),
                code,
                errors: None,
            },
            other => Self {
                message: other.to_string(),
                code,
                errors: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(UserError::NotFound(1)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(UserError::AlreadyExists("a@b.c".into())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(UserError::Validation(vec![])).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(UserError::ActorCommunicationError("closed".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::BadRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validation_body_lists_fields() {
        let err = ApiError::from(UserError::Validation(vec![FieldViolation::new(
            "age",
            "age must be between 18 and 100",
        )]));
        let body = ErrorResponse::from(err);
        assert_eq!(body.code, 400);
        let errors = body.errors.unwrap();
        assert_eq!(errors[0].field, "age");
    }

    #[test]
    fn test_internal_details_are_not_leaked() {
        let err = ApiError::from(UserError::ActorCommunicationError("Actor closed".into()));
        let body = ErrorResponse::from(err);
        assert_eq!(body.message, INTERNAL_ERROR_MESSAGE);
        assert!(body.errors.is_none());
    }

    #[test]
    fn test_not_found_message_names_the_id() {
        let body = ErrorResponse::from(ApiError::from(UserError::NotFound(42)));
        assert_eq!(body.message, "User with ID 42 not found");
    }
}
