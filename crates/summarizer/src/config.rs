//! Configuration for the summarization client.

use std::env;

use crate::error::SummarizerError;

/// Configuration for [`Summarizer`](crate::Summarizer).
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// OpenAI-compatible API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: f32,

    /// Maximum tokens for the response, if bounded.
    pub max_tokens: Option<u32>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: None,
        }
    }
}

impl SummarizerConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `OPENAI_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `OPENAI_API_URL` - API base URL (default: https://api.openai.com)
    /// - `OPENAI_MODEL` - Model name (default: gpt-4o-mini)
    /// - `OPENAI_TEMPERATURE` - Temperature (default: 0.7)
    /// - `OPENAI_MAX_TOKENS` - Max response tokens (default: unset)
    pub fn from_env() -> Result<Self, SummarizerError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| SummarizerError::Configuration("OPENAI_API_KEY not set".to_string()))?;

        if api_key.trim().is_empty() {
            return Err(SummarizerError::Configuration(
                "OPENAI_API_KEY is empty".to_string(),
            ));
        }

        let api_url =
            env::var("OPENAI_API_URL").unwrap_or_else(|_| "https://api.openai.com".to_string());

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let temperature = env::var("OPENAI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.7);

        let max_tokens = env::var("OPENAI_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        Ok(Self {
            api_url,
            api_key,
            model,
            temperature,
            max_tokens,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> SummarizerConfigBuilder {
        SummarizerConfigBuilder::default()
    }
}

/// Builder for SummarizerConfig.
#[derive(Debug, Default)]
pub struct SummarizerConfigBuilder {
    config: SummarizerConfig,
}

impl SummarizerConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = temp;
        self
    }

    /// Set the max response tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SummarizerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SummarizerConfig::default();

        assert_eq!(config.api_url, "https://api.openai.com");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.7);
        assert!(config.max_tokens.is_none());
    }

    #[test]
    fn test_builder_all_options() {
        let config = SummarizerConfig::builder()
            .api_key("my-key")
            .api_url("https://custom.api.com")
            .model("gpt-4o")
            .temperature(0.2)
            .max_tokens(512)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "https://custom.api.com");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, Some(512));
    }

    // Environment-based scenarios share one test to avoid races between
    // parallel tests (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        fn clear_all_openai_vars() {
            std::env::remove_var("OPENAI_API_KEY");
            std::env::remove_var("OPENAI_API_URL");
            std::env::remove_var("OPENAI_MODEL");
            std::env::remove_var("OPENAI_TEMPERATURE");
            std::env::remove_var("OPENAI_MAX_TOKENS");
        }

        // Missing API key should error.
        clear_all_openai_vars();
        let err = SummarizerConfig::from_env().unwrap_err();
        match err {
            SummarizerError::Configuration(msg) => assert!(msg.contains("OPENAI_API_KEY")),
            _ => panic!("expected Configuration error"),
        }

        // Empty API key should error too.
        std::env::set_var("OPENAI_API_KEY", "  ");
        assert!(SummarizerConfig::from_env().is_err());

        // Only the key set: defaults apply.
        std::env::set_var("OPENAI_API_KEY", "test-env-key");
        let config = SummarizerConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, "https://api.openai.com");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.7);
        assert!(config.max_tokens.is_none());

        // Everything set.
        std::env::set_var("OPENAI_API_URL", "https://test.api.com");
        std::env::set_var("OPENAI_MODEL", "gpt-4o");
        std::env::set_var("OPENAI_TEMPERATURE", "0.9");
        std::env::set_var("OPENAI_MAX_TOKENS", "2048");
        let config = SummarizerConfig::from_env().unwrap();
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.temperature, 0.9);
        assert_eq!(config.max_tokens, Some(2048));

        clear_all_openai_vars();
    }
}
