//! Coaching assistant for a selected process step.
//!
//! - `prompt` - renders the transcript and step context into one prompt
//! - `coach` - sends the prompt once and always yields displayable text
//! - `session` - per-step transcript with the Idle/Sending state machine
//! - `suggestions` - starter questions per step type

pub mod coach;
pub mod prompt;
pub mod session;
pub mod suggestions;

pub use coach::{AgileCoach, CONNECTION_FALLBACK, EMPTY_RESPONSE_FALLBACK};
pub use prompt::{build_prompt, render_transcript, NOT_SPECIFIED};
pub use session::{ChatSession, PendingRequest, SessionError, SessionState};
pub use suggestions::{suggested_prompts, COMMON_PROMPTS};
