//! # REST API Errors
//!
//! Error types for the REST API module.
//!
//! Every error renders as `{"success": false, "errors": [...]}` with the
//! status code determined by its kind: validation and conflict failures
//! are 400, a missing id is 404, everything unexpected is 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more field rules violated; always the full list.
    #[error("validation failed")]
    Validation(Vec<String>),

    /// Store-level failure (conflict, not-found, integrity).
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Request body was not a JSON object of the expected shape.
    #[error("Invalid JSON")]
    InvalidBody,

    /// Internal error outside the store taxonomy.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::PhoneConflict) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::EmailConflict) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Integrity) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Sqlite(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The error strings carried in the response body.
    fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Validation(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub errors: Vec<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            errors: err.messages(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
