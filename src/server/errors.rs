//! HTTP error translation.
//!
//! The single cross-cutting handler for the transport boundary: every
//! typed core error is mapped here to a response status and a
//! `{"error": message}` body. Unanticipated failures become a generic
//! server error; internal diagnostic detail is logged server-side and
//! never exposed to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::error::ServiceError;

/// Errors produced at the HTTP boundary.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// The request body failed shape validation at the binding step.
    #[error("{0}")]
    InvalidBody(String),

    /// A typed error surfaced by the record service.
    #[error("{0}")]
    Service(#[from] ServiceError),
}

impl ApiError {
    /// HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::Service(ServiceError::Query(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(ServiceError::DuplicateName) => StatusCode::CONFLICT,
            Self::Service(ServiceError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The caller-facing message for this error.
    ///
    /// Server errors collapse to a generic message; the detail stays in
    /// the server log.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Service(ServiceError::Storage(_)) => "An unexpected error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

/// JSON error body: `{"error": message}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Caller-facing error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorResponse {
            error: self.public_message(),
        });
        (status, body).into_response()
    }
}
