//! Summarization client for the OpenAI chat completions API.

use reqwest::Client;
use tracing::{debug, warn};

use crate::api_types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::SummarizerConfig;
use crate::error::SummarizerError;
use crate::prompts;

/// Client for generating transcript summaries.
pub struct Summarizer {
    client: Client,
    config: SummarizerConfig,
}

impl Summarizer {
    /// Create a new summarizer with the given configuration.
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizerError> {
        let client = Client::builder().build().map_err(|e| {
            SummarizerError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, config })
    }

    /// Create a summarizer from environment variables.
    ///
    /// See [`SummarizerConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, SummarizerError> {
        Self::new(SummarizerConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize a transcript.
    ///
    /// The summary type, style, and tonality select the prompt clauses;
    /// see [`prompts::system_prompt`]. Unknown values get the generic
    /// clause rather than an error.
    pub async fn summarize(
        &self,
        text: &str,
        summary_type: &str,
        style: &str,
        tonality: &str,
    ) -> Result<String, SummarizerError> {
        let messages = vec![
            ChatMessage::system(prompts::system_prompt(summary_type, style, tonality)),
            ChatMessage::user(text),
        ];

        let completion = self.chat_completion(messages).await?;

        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::to_string)
            .ok_or_else(|| {
                SummarizerError::InvalidResponse("no content in completion".to_string())
            })?;

        if let Some(usage) = completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(content)
    }

    /// Make a chat completion request.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, SummarizerError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!("Sending chat completion request for model {}", request.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizerError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Prefer the structured message when the body parses.
            let message = serde_json::from_str::<ApiErrorBody>(&error_text)
                .map(|body| body.error.message)
                .unwrap_or(error_text);

            warn!(status = status.as_u16(), "Chat completion request failed");

            return Err(SummarizerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(|e| {
            SummarizerError::InvalidResponse(format!("Failed to parse response: {}", e))
        })
    }
}
