//! Transcript summarization route.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use database::models::{Style, SummaryType, Tonality};

use crate::error::Result;
use crate::state::AppState;

/// Request to summarize a transcript.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Transcript text to summarize.
    pub text: String,
    /// Summary flavor; defaults to brief.
    #[serde(default)]
    pub summary_type: SummaryType,
    /// Output formatting; defaults to paragraph.
    #[serde(default)]
    pub style: Style,
    /// Tone; defaults to professional.
    #[serde(default)]
    pub tonality: Tonality,
}

/// Summarization result.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub summary_type: SummaryType,
}

/// Summarize transcript text.
pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>> {
    let summary = state
        .summarizer
        .summarize(
            &req.text,
            req.summary_type.as_str(),
            req.style.as_str(),
            req.tonality.as_str(),
        )
        .await?;

    info!(
        summary_type = req.summary_type.as_str(),
        chars = summary.len(),
        "transcript summarized"
    );

    Ok(Json(SummarizeResponse {
        summary,
        summary_type: req.summary_type,
    }))
}
