//! Error types for the API server.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The X-Device-Id header is missing or empty.
    #[error("X-Device-Id header is required")]
    MissingDeviceId,

    /// The requested record does not exist for this device.
    #[error("Summary not found")]
    NotFound,

    /// Uploaded file has an unsupported extension.
    #[error("Only .txt files are supported currently.")]
    UnsupportedFile,

    /// Uploaded file is not valid UTF-8 text.
    #[error("Uploaded file is not valid UTF-8 text")]
    InvalidEncoding,

    /// Multipart form was malformed or missing the file field.
    #[error("Invalid upload: {0}")]
    Upload(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] database::DatabaseError),

    /// Summarization backend failure.
    #[error("Summarization failed: {0}")]
    Summarizer(#[from] summarizer::SummarizerError),

    /// Translation backend failure.
    #[error("Translation failed: {0}")]
    Translator(#[from] translator::TranslateError),
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Upload(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingDeviceId
            | ApiError::UnsupportedFile
            | ApiError::InvalidEncoding
            | ApiError::Upload(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Summarizer(err) => {
                tracing::error!("Summarization error: {}", err);
                StatusCode::BAD_GATEWAY
            }
            ApiError::Translator(err) => {
                tracing::error!("Translation error: {}", err);
                StatusCode::BAD_GATEWAY
            }
        };

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
