//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use hb_core::AccountError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "HANDLE_TAKEN", "TOO_SHORT")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Loading the account or claiming a username failed
    #[error(transparent)]
    Account(#[from] AccountError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Account(e) => match e {
                AccountError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
                AccountError::HandleTaken { .. } => StatusCode::CONFLICT,
                AccountError::WriteFailed { .. } => StatusCode::BAD_GATEWAY,
                AccountError::LoadFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                _ if e.is_validation() => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = match self {
            ApiError::Account(e) => ApiErrorBody {
                code: e.code().into(),
                message: e.user_message(),
                field: e.field().map(String::from),
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
