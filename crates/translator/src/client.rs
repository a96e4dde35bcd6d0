//! Translation client for the gtx translate endpoint.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::TranslateError;

/// Default translate endpoint.
pub const DEFAULT_API_URL: &str = "https://translate.googleapis.com";

/// Client for translating text. The source language is auto-detected.
pub struct Translator {
    client: Client,
    api_url: String,
}

impl Translator {
    /// Create a new translator against the default endpoint.
    pub fn new() -> Result<Self, TranslateError> {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Create a translator against a custom endpoint.
    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| {
                TranslateError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Translate text to the target language code (e.g. "fi", "sv").
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/translate_a/single", self.api_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslateError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            TranslateError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let translated = collect_segments(&body)?;

        debug!(
            target = target_language,
            chars = translated.len(),
            "translated text"
        );

        Ok(translated)
    }
}

/// Concatenate the translated segments of a gtx response.
///
/// The body is a nested array; element 0 holds one
/// `[translated, original, ...]` entry per sentence segment.
fn collect_segments(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::InvalidResponse("missing segment array".to_string()))?;

    let mut out = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            out.push_str(text);
        }
    }

    if out.is_empty() {
        return Err(TranslateError::InvalidResponse(
            "no translated segments".to_string(),
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collects_single_segment() {
        let body = json!([[["Tämä on lyhyt yhteenveto.", "This is a brief summary.", null]], null, "en"]);
        assert_eq!(
            collect_segments(&body).unwrap(),
            "Tämä on lyhyt yhteenveto."
        );
    }

    #[test]
    fn test_concatenates_multiple_segments() {
        let body = json!([
            [
                ["Hei, ", "Hello, ", null],
                ["maailma.", "world.", null]
            ],
            null,
            "en"
        ]);
        assert_eq!(collect_segments(&body).unwrap(), "Hei, maailma.");
    }

    #[test]
    fn test_rejects_unexpected_shape() {
        let body = json!({"error": "nope"});
        assert!(matches!(
            collect_segments(&body),
            Err(TranslateError::InvalidResponse(_))
        ));

        let body = json!([[]]);
        assert!(matches!(
            collect_segments(&body),
            Err(TranslateError::InvalidResponse(_))
        ));
    }
}
