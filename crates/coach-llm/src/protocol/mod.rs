//! Wire types of the hosted text-generation API.

pub mod gemini;

pub use gemini::{GeminiContent, GeminiErrorEnvelope, GeminiPart, GeminiRequest, GeminiResponse};
