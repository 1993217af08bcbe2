//! API error types and their JSON responses.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Errors surfaced at the HTTP boundary. The engine itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No symptoms provided. Please select at least one symptom.")]
    NoSymptoms,
    #[error("Symptoms must be a list of strings.")]
    InvalidSymptoms,
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("An internal error occurred during prediction.")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoSymptoms | ApiError::InvalidSymptoms | ApiError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let details = match &self {
            ApiError::Internal(detail) => {
                tracing::error!(detail, "Error during prediction");
                Some(detail.clone())
            }
            _ => None,
        };

        let body = ErrorBody {
            error: self.to_string(),
            details,
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Turn a handler panic into an [`ApiError::Internal`] response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(detail).into_response()
}
