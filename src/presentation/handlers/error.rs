use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{InputError, SimplificationError, WordInfoError};
use crate::domain::FeedbackError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Every handler failure ends up here and leaves as `{"error": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Access denied")]
    Forbidden,
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<SimplificationError> for ApiError {
    fn from(err: SimplificationError) -> Self {
        match err {
            SimplificationError::Input(input) if input.is_client_error() => {
                tracing::warn!(error = %input, "Rejected simplify input");
                ApiError::BadRequest(input.to_string())
            }
            SimplificationError::Input(InputError::Extraction(e)) => {
                tracing::error!(error = %e, "File extraction failed");
                ApiError::Internal("Failed to extract text from file")
            }
            other => {
                tracing::error!(error = %other, "Simplification failed");
                ApiError::Internal("Simplification failed")
            }
        }
    }
}

impl From<WordInfoError> for ApiError {
    fn from(err: WordInfoError) -> Self {
        match err {
            WordInfoError::MissingWord => ApiError::BadRequest(err.to_string()),
            WordInfoError::Completion(e) => {
                tracing::error!(error = %e, "Word info lookup failed");
                ApiError::Internal("Failed to fetch word info")
            }
        }
    }
}

impl From<FeedbackError> for ApiError {
    fn from(err: FeedbackError) -> Self {
        tracing::warn!(error = %err, "Rejected feedback");
        ApiError::BadRequest(err.to_string())
    }
}
