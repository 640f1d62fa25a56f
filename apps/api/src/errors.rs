use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::search_client::SearchError;

/// Request-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The upload is empty or could not be opened as a PDF.
    #[error("Failed to parse PDF: {0}")]
    InvalidDocument(String),

    /// A provider reply was empty, not JSON, or did not match the expected record.
    #[error("Failed to structure {stage}: {reason}")]
    StructuringFailed { stage: &'static str, reason: String },

    /// The transport call to a provider failed, timed out, or returned a non-2xx status.
    #[error("{provider} provider unavailable: {message}")]
    ProviderUnavailable {
        provider: &'static str,
        message: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn structuring(stage: &'static str, reason: impl Into<String>) -> Self {
        AppError::StructuringFailed {
            stage,
            reason: reason.into(),
        }
    }

    /// Splits LLM failures into reply-shape problems and transport problems.
    pub fn from_llm(stage: &'static str, err: LlmError) -> Self {
        match err {
            LlmError::Parse(e) => AppError::structuring(stage, format!("reply is not valid JSON: {e}")),
            LlmError::EmptyContent => AppError::structuring(stage, "provider returned an empty reply"),
            other => AppError::ProviderUnavailable {
                provider: "text-generation",
                message: other.to_string(),
            },
        }
    }

    pub fn from_search(err: SearchError) -> Self {
        AppError::ProviderUnavailable {
            provider: "search",
            message: err.to_string(),
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidDocument(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_DOCUMENT"),
            AppError::StructuringFailed { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STRUCTURING_FAILED")
            }
            AppError::ProviderUnavailable { .. } => (StatusCode::BAD_GATEWAY, "PROVIDER_UNAVAILABLE"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            AppError::Validation(_) => self.to_string(),
            other => {
                tracing::error!("Request failed ({code}): {other}");
                other.to_string()
            }
        };

        let body = Json(json!({
            "detail": message,
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
