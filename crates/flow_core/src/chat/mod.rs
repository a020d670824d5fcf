//! Transcript entries for the per-step coaching chat.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Speaker label used when the transcript is rendered into a prompt.
    pub fn speaker(&self) -> &'static str {
        match self {
            ChatRole::User => "User",
            ChatRole::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.speaker())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Milliseconds since the Unix epoch. Used for ordering and display only.
    pub timestamp: i64,
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            timestamp: now_millis(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            timestamp: now_millis(),
        }
    }

    /// Opening message of a session bound to the step labelled `label`.
    pub fn greeting(label: &str) -> Self {
        Self::assistant(format!(
            "Hello! I can help you understand the \"{label}\" step. What would you like to know?"
        ))
    }
}
