//! Response types for the benefits API.
//!
//! Every endpoint wraps its payload in the uniform
//! `{ success, data?, message? }` envelope defined here, and engine errors
//! are mapped to HTTP status codes plus a failure envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The uniform response envelope.
///
/// `data` carries the payload on success; `message` carries a
/// human-readable description on failure. Absent fields are omitted from
/// the JSON entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// The payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// A human-readable message, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Creates a success envelope around a payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Creates a failure envelope with a message and no payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// A failure envelope paired with its HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The failure envelope body.
    pub body: ApiResponse<()>,
}

impl ApiErrorResponse {
    /// Creates an error response with the given status and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiResponse::failure(message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let status = match &error {
            EngineError::NotFound { .. } => StatusCode::NOT_FOUND,
            EngineError::InvalidEmployee { .. } | EngineError::InvalidDependent { .. } => {
                StatusCode::BAD_REQUEST
            }
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, error.to_string())
    }
}
