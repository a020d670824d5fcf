use std::sync::Arc;

use coach_llm::{GeminiProvider, LLMProvider};
use flow_core::{ChatMessage, Config, ProcessStep};

use crate::prompt::build_prompt;

/// Returned when the service answers without any text.
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "I apologize, I couldn't generate a response at this time.";

/// Returned when the call fails for any reason.
pub const CONNECTION_FALLBACK: &str = "I'm having trouble connecting to the Agile knowledge base right now. Please check your API configuration.";

/// Answers questions about one process step with a single completion call.
#[derive(Clone)]
pub struct AgileCoach {
    provider: Arc<dyn LLMProvider>,
}

impl AgileCoach {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    /// Coach backed by the Gemini provider built from `config`.
    pub fn from_config(config: &Config) -> coach_llm::Result<Self> {
        let provider = GeminiProvider::from_config(config)?;
        Ok(Self::new(Arc::new(provider)))
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Build the prompt from `transcript` and `step`, send it once, and return text
    /// that can be shown to the user as-is.
    ///
    /// Never fails: errors become [`CONNECTION_FALLBACK`], an empty answer becomes
    /// [`EMPTY_RESPONSE_FALLBACK`].
    pub async fn build_and_send(&self, transcript: &[ChatMessage], step: &ProcessStep) -> String {
        let prompt = build_prompt(transcript, step);

        log::debug!(
            "Asking {} about step '{}' ({} transcript entries)",
            self.provider.model(),
            step.id,
            transcript.len()
        );

        match self.provider.generate(&prompt).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                log::warn!("Empty response for step '{}'", step.id);
                EMPTY_RESPONSE_FALLBACK.to_string()
            }
            Err(e) => {
                log::error!("Assistant request for step '{}' failed: {}", step.id, e);
                CONNECTION_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use coach_llm::LLMError;
    use flow_core::StepType;

    use super::*;

    enum Outcome {
        Text(&'static str),
        Nothing,
        Fail,
    }

    struct StubProvider {
        outcome: Outcome,
        prompts: Mutex<Vec<String>>,
    }

    impl StubProvider {
        fn new(outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LLMProvider for StubProvider {
        async fn generate(&self, prompt: &str) -> coach_llm::Result<Option<String>> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match self.outcome {
                Outcome::Text(text) => Ok(Some(text.to_string())),
                Outcome::Nothing => Ok(None),
                Outcome::Fail => Err(LLMError::Api("boom".to_string())),
            }
        }

        fn model(&self) -> &str {
            "stub"
        }
    }

    fn step() -> ProcessStep {
        ProcessStep::new("team-charter", "Team Charter", StepType::Document, "setup")
            .with_responsibility("Dev Team")
    }

    #[tokio::test]
    async fn returns_text_verbatim() {
        let provider = StubProvider::new(Outcome::Text("  Keep it short.\n"));
        let coach = AgileCoach::new(provider.clone());

        let reply = coach.build_and_send(&[ChatMessage::user("hi")], &step()).await;

        assert_eq!(reply, "  Keep it short.\n");
        assert_eq!(provider.calls().len(), 1);
        assert!(provider.calls()[0].contains("- Responsibility: Dev Team"));
    }

    #[tokio::test]
    async fn empty_payloads_become_sentinel() {
        for outcome in [Outcome::Text(""), Outcome::Text("   "), Outcome::Nothing] {
            let coach = AgileCoach::new(StubProvider::new(outcome));
            let reply = coach.build_and_send(&[ChatMessage::user("hi")], &step()).await;
            assert_eq!(reply, EMPTY_RESPONSE_FALLBACK);
        }
    }

    #[tokio::test]
    async fn failure_becomes_fallback_after_one_attempt() {
        let provider = StubProvider::new(Outcome::Fail);
        let coach = AgileCoach::new(provider.clone());

        let reply = coach.build_and_send(&[], &step()).await;

        assert_eq!(reply, CONNECTION_FALLBACK);
        assert_eq!(provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn every_combination_yields_non_empty_text() {
        let transcripts = [Vec::new(), vec![ChatMessage::user("hi")]];
        for transcript in &transcripts {
            for outcome in [Outcome::Text("ok"), Outcome::Fail, Outcome::Text("")] {
                let coach = AgileCoach::new(StubProvider::new(outcome));
                let reply = coach.build_and_send(transcript, &step()).await;
                assert!(!reply.is_empty());
            }
        }
    }

    #[test]
    fn coach_from_config_uses_fixed_model() {
        let coach = AgileCoach::from_config(&Config::default()).unwrap();
        assert_eq!(coach.model(), "gemini-2.5-flash");
    }
}
