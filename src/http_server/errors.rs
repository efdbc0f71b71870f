//! # HTTP Errors and Error Boundary
//!
//! Validation and not-found are answered with their own status codes.
//! Anything else ends up here as a 500 with a fixed body; the cause is logged
//! and never sent to the client.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const TODO_NOT_FOUND: &str = "Todo not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Input failed a precondition
    #[error("{0}")]
    Validation(String),

    /// Request body is not usable JSON for this endpoint
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No item with the requested id
    #[error("Todo not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn title_required() -> Self {
        ApiError::Validation(TITLE_REQUIRED.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            match &self {
                ApiError::Store(e) => error!(code = e.code(), error = %e, "request failed"),
                other => error!(error = %other, "request failed"),
            }
            return internal_error_response();
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(INTERNAL_SERVER_ERROR)),
    )
        .into_response()
}

/// Converts a handler panic into the same 500 response as any other failure
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(panic = %detail, "handler panicked");
    internal_error_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::title_required().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store(StoreError::Write("disk full".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_client_errors_carry_message() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, serde_json::json!({"error": TODO_NOT_FOUND}));

        let response = ApiError::title_required().into_response();
        assert_eq!(body_json(response).await, serde_json::json!({"error": TITLE_REQUIRED}));
    }

    #[tokio::test]
    async fn test_server_errors_do_not_leak_details() {
        let response =
            ApiError::Store(StoreError::Read("/secret/path: denied".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": INTERNAL_SERVER_ERROR})
        );
    }

    #[tokio::test]
    async fn test_panic_becomes_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": INTERNAL_SERVER_ERROR})
        );
    }
}
