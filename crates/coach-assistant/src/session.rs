//! Chat session scoped to one selected step.
//!
//! The transcript is append-only while a step stays selected. Selecting another
//! step replaces it with a fresh greeting. A submission moves the session from
//! `Idle` to `Sending`; the reply (or its fallback text) moves it back.

use flow_core::{ChatMessage, ProcessStep};
use thiserror::Error;

use crate::coach::AgileCoach;
use crate::suggestions::suggested_prompts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Sending,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Message is empty")]
    EmptyInput,

    #[error("A reply for this step is still pending")]
    Busy,

    #[error("No reply is pending")]
    NotSending,
}

/// Snapshot taken when a question is submitted.
///
/// It owns everything the assistant needs, so the session does not have to stay
/// borrowed while the reply is awaited.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    generation: u64,
    pub transcript: Vec<ChatMessage>,
    pub step: ProcessStep,
}

#[derive(Debug)]
pub struct ChatSession<'a> {
    step: &'a ProcessStep,
    transcript: Vec<ChatMessage>,
    state: SessionState,
    /// Bumped on every step change; replies for an older step are dropped.
    generation: u64,
}

impl<'a> ChatSession<'a> {
    pub fn new(step: &'a ProcessStep) -> Self {
        Self {
            step,
            transcript: vec![ChatMessage::greeting(&step.label)],
            state: SessionState::Idle,
            generation: 0,
        }
    }

    pub fn step(&self) -> &'a ProcessStep {
        self.step
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SessionState::Sending
    }

    pub fn suggested_prompts(&self) -> Vec<&'static str> {
        suggested_prompts(self.step.step_type)
    }

    /// Switch to `step`, discarding the conversation and any pending reply.
    pub fn select_step(&mut self, step: &'a ProcessStep) {
        log::debug!("Chat session switched from '{}' to '{}'", self.step.id, step.id);
        self.step = step;
        self.transcript = vec![ChatMessage::greeting(&step.label)];
        self.state = SessionState::Idle;
        self.generation += 1;
    }

    /// Append the user's question and enter `Sending`.
    pub fn begin_submit(&mut self, text: &str) -> Result<PendingRequest, SessionError> {
        if text.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self.is_sending() {
            return Err(SessionError::Busy);
        }

        self.transcript.push(ChatMessage::user(text));
        self.state = SessionState::Sending;

        Ok(PendingRequest {
            generation: self.generation,
            transcript: self.transcript.clone(),
            step: self.step.clone(),
        })
    }

    /// Append the assistant's reply for `pending` and return to `Idle`.
    ///
    /// Replies for a step that is no longer selected are dropped and `Ok(None)` is
    /// returned.
    pub fn complete(
        &mut self,
        pending: PendingRequest,
        reply: String,
    ) -> Result<Option<&ChatMessage>, SessionError> {
        if pending.generation != self.generation {
            log::debug!(
                "Dropping reply for '{}'; the selected step changed",
                pending.step.id
            );
            return Ok(None);
        }
        if !self.is_sending() {
            return Err(SessionError::NotSending);
        }

        self.transcript.push(ChatMessage::assistant(reply));
        self.state = SessionState::Idle;
        Ok(self.transcript.last())
    }

    /// Submit `text`, wait for the coach, and return the appended reply.
    pub async fn submit(
        &mut self,
        coach: &AgileCoach,
        text: &str,
    ) -> Result<&ChatMessage, SessionError> {
        let pending = self.begin_submit(text)?;
        let reply = coach
            .build_and_send(&pending.transcript, &pending.step)
            .await;
        self.complete(pending, reply)?
            .ok_or(SessionError::NotSending)
    }
}
