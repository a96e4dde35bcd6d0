//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Flavor of summary requested by the client.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum SummaryType {
    /// Very concise, critical clinical information only.
    #[default]
    Brief,
    /// Comprehensive: background, symptoms, diagnosis, plan.
    Detailed,
    /// Main topics and key information points.
    KeyPoints,
    /// Actionable items as a to-do list.
    ActionPoints,
}

impl SummaryType {
    /// Wire and storage name for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryType::Brief => "brief",
            SummaryType::Detailed => "detailed",
            SummaryType::KeyPoints => "key_points",
            SummaryType::ActionPoints => "action_points",
        }
    }
}

/// Output formatting for the generated summary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Style {
    /// Cohesive paragraph.
    #[default]
    Paragraph,
    /// Bullet points.
    Bullets,
    /// Numbered list.
    Numbered,
}

impl Style {
    /// Wire and storage name for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Paragraph => "paragraph",
            Style::Bullets => "bullets",
            Style::Numbered => "numbered",
        }
    }
}

/// Tone of the generated summary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Tonality {
    /// Formal medical tone.
    #[default]
    Professional,
    /// Casual, friendly tone.
    Casual,
    /// Simple language suitable for a patient.
    Simplified,
}

impl Tonality {
    /// Wire and storage name for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tonality::Professional => "professional",
            Tonality::Casual => "casual",
            Tonality::Simplified => "simplified",
        }
    }
}

/// A stored transcript summary, scoped to a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SummaryRecord {
    /// UUID assigned by the repository on insert; immutable.
    pub id: String,
    /// Client-supplied tenancy key. Opaque, not validated for format.
    pub device_id: String,
    /// Short display title derived from the input text.
    pub title: String,
    /// Original transcript text; upsert match key within a device.
    pub input_text: String,
    /// Generated summary text.
    pub summary: String,
    /// Optional translated variant.
    pub translated_summary: Option<String>,
    /// Requested summary flavor.
    pub summary_type: SummaryType,
    /// Requested output formatting.
    pub style: Style,
    /// Requested tone.
    pub tonality: Tonality,
    /// Target language code, or "original".
    pub language: String,
    /// Creation timestamp (RFC 3339 UTC). Never changes after insert.
    pub created_at: String,
    /// Last update timestamp (RFC 3339 UTC).
    pub updated_at: String,
    /// Soft-delete timestamp. None means the record is active.
    pub deleted_at: Option<String>,
}

/// Fields accepted when saving or upserting a summary.
///
/// Optional fields left as `None` fall back to the stored value on an
/// upsert hit, or to the documented defaults on insert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryPayload {
    /// Original transcript text.
    pub input_text: String,
    /// Generated summary text.
    pub summary: String,
    /// Optional translated variant.
    pub translated_summary: Option<String>,
    /// Summary flavor; defaults to brief.
    pub summary_type: Option<SummaryType>,
    /// Output formatting; defaults to paragraph.
    pub style: Option<Style>,
    /// Tone; defaults to professional.
    pub tonality: Option<Tonality>,
    /// Target language code; defaults to "original".
    pub language: Option<String>,
}

/// One page of history results.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryPage {
    /// Records on this page, newest first.
    pub items: Vec<SummaryRecord>,
    /// Whether more records remain beyond this page.
    pub has_more: bool,
    /// The offset this page was fetched at.
    pub skip: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(SummaryType::KeyPoints.as_str(), "key_points");
        assert_eq!(SummaryType::ActionPoints.as_str(), "action_points");
        assert_eq!(Style::Paragraph.as_str(), "paragraph");
        assert_eq!(Tonality::Simplified.as_str(), "simplified");
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(SummaryType::default(), SummaryType::Brief);
        assert_eq!(Style::default(), Style::Paragraph);
        assert_eq!(Tonality::default(), Tonality::Professional);
    }

    #[test]
    fn test_enum_serde_round_trip() {
        let json = serde_json::to_string(&SummaryType::KeyPoints).unwrap();
        assert_eq!(json, "\"key_points\"");
        let parsed: SummaryType = serde_json::from_str("\"action_points\"").unwrap();
        assert_eq!(parsed, SummaryType::ActionPoints);
    }
}
