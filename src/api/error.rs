//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Connection hub error
    #[error("Hub error: {0}")]
    Hub(#[from] crate::websocket::HubError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Hub(crate::websocket::HubError::ConnectionNotFound) => {
                (StatusCode::NOT_FOUND, "CONNECTION_NOT_FOUND")
            }
            ApiError::Hub(_) => (StatusCode::SERVICE_UNAVAILABLE, "HUB_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::websocket::HubError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("empty".into()).status_and_code().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Hub(HubError::ConnectionNotFound).status_and_code(),
            (StatusCode::NOT_FOUND, "CONNECTION_NOT_FOUND")
        );
        assert_eq!(
            ApiError::Hub(HubError::SendFailed).status_and_code().0,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::Validation("empty body".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
