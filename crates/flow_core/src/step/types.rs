use std::fmt;

use serde::{Deserialize, Serialize};

/// Presentation category of a process step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum StepType {
    Document,
    Meeting,
    Workshop,
    Decision,
    Phase,
    Action,
    Terminal,
}

impl StepType {
    /// All variants in declaration order.
    pub const ALL: [StepType; 7] = [
        StepType::Document,
        StepType::Meeting,
        StepType::Workshop,
        StepType::Decision,
        StepType::Phase,
        StepType::Action,
        StepType::Terminal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepType::Document => "DOCUMENT",
            StepType::Meeting => "MEETING",
            StepType::Workshop => "WORKSHOP",
            StepType::Decision => "DECISION",
            StepType::Phase => "PHASE",
            StepType::Action => "ACTION",
            StepType::Terminal => "TERMINAL",
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named column of the flow. Declaration order is the left-to-right order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    pub id: String,
    pub label: String,
}

impl Phase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// One node of the process catalog.
///
/// `step_type` is optional only so that catalogs authored by hand (or deserialized)
/// can be checked for a missing type; the catalog validation reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub step_type: Option<StepType>,
    pub phase_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
}

impl ProcessStep {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        step_type: StepType,
        phase_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            step_type: Some(step_type),
            phase_id: phase_id.into(),
            description: None,
            responsibility: None,
            participants: None,
            content: None,
            activities: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_responsibility(mut self, responsibility: impl Into<String>) -> Self {
        self.responsibility = Some(responsibility.into());
        self
    }

    pub fn with_participants(mut self, participants: impl Into<String>) -> Self {
        self.participants = Some(participants.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_activities<I, S>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activities = Some(activities.into_iter().map(Into::into).collect());
        self
    }

    /// True when the step names who owns it or who attends it.
    pub fn has_people(&self) -> bool {
        self.responsibility.is_some() || self.participants.is_some()
    }
}
