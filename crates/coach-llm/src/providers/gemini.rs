//! Google Gemini provider implementation.

use async_trait::async_trait;
use flow_core::config::DEFAULT_API_BASE;
use flow_core::Config;
use reqwest::{Client, StatusCode};

use crate::protocol::{GeminiErrorEnvelope, GeminiRequest, GeminiResponse};
use crate::provider::{LLMError, LLMProvider, Result};

/// Model every coaching request is sent to.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Google Gemini API provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Build a provider from the loaded configuration.
    ///
    /// A missing API key is accepted here; calls will fail with [`LLMError::Auth`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        let api_key = config.api_key.clone().unwrap_or_default();
        if api_key.trim().is_empty() {
            log::warn!("No API key configured; assistant requests will fail until API_KEY is set");
        }

        Ok(Self {
            client,
            api_key,
            base_url: config.api_base().to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Set a custom base URL (e.g., for proxies or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<GeminiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        if self.api_key.trim().is_empty() {
            return Err(LLMError::Auth(
                "Gemini API key is not configured. Set API_KEY or add api_key to the config file."
                    .to_string(),
            ));
        }

        let url = self.endpoint();
        let request = GeminiRequest::from_prompt(prompt);

        log::debug!(
            "Gemini request: {} ({} prompt chars)",
            url,
            prompt.chars().count()
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LLMError::Auth(format!(
                "Gemini authentication failed: {}. Please check your API key.",
                error_message(&body)
            )));
        }

        if !status.is_success() {
            return Err(LLMError::Api(format!(
                "Gemini API error: HTTP {}: {}",
                status,
                error_message(&body)
            )));
        }

        let parsed: GeminiResponse = serde_json::from_str(&body)?;
        let text = parsed.text();

        log::debug!(
            "Gemini response: finish_reason={:?}, {} chars",
            parsed.finish_reason(),
            text.as_ref().map_or(0, |t| t.chars().count())
        );

        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
