use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),
}

pub type Result<T> = std::result::Result<T, LLMError>;

/// One-shot text generation.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Send `prompt` once and return the generated text.
    ///
    /// `Ok(None)` means the service answered but produced no text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>>;

    /// Model identifier the provider sends requests to.
    fn model(&self) -> &str;
}
