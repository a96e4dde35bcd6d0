//! Translation route.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;

/// Request to translate text.
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    /// Text to translate. Source language is auto-detected.
    pub text: String,
    /// Target language code (e.g. "fi").
    pub target_language: String,
}

/// Translation result.
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub target_language: String,
}

/// Translate text to the target language.
pub async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>> {
    let translated_text = state
        .translator
        .translate(&req.text, &req.target_language)
        .await?;

    Ok(Json(TranslateResponse {
        translated_text,
        target_language: req.target_language,
    }))
}
