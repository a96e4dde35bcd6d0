//! Plain-text transcript upload.

use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::error::{ApiError, Result};

/// Parsed upload contents.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
}

/// Accept a .txt transcript upload and return its text content.
pub async fn upload(mut multipart: Multipart) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if !file_name.ends_with(".txt") {
            return Err(ApiError::UnsupportedFile);
        }

        let bytes = field.bytes().await?;
        let text = String::from_utf8(bytes.to_vec()).map_err(|_| ApiError::InvalidEncoding)?;

        info!(file = %file_name, bytes = text.len(), "transcript uploaded");
        return Ok(Json(UploadResponse { text }));
    }

    Err(ApiError::Upload("missing file field".to_string()))
}
