pub mod protocol;
pub mod provider;
pub mod providers;

pub use provider::{LLMError, LLMProvider, Result};
pub use providers::gemini::{GeminiProvider, DEFAULT_MODEL};
