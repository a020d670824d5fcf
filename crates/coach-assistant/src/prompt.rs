use flow_core::{ChatMessage, ProcessStep};

/// Placeholder for context fields the step does not define.
pub const NOT_SPECIFIED: &str = "Not specified";

const ACTIVITY_SEPARATOR: &str = ", ";

/// Render the transcript as `"<Speaker>: <text>"` lines, oldest first.
pub fn render_transcript(transcript: &[ChatMessage]) -> String {
    transcript
        .iter()
        .map(|message| format!("{}: {}", message.role.speaker(), message.text))
        .collect::<Vec<_>>()
        .join("\n")
}

fn field(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_SPECIFIED)
}

fn activities(step: &ProcessStep) -> String {
    match step.activities.as_deref() {
        Some(items) if !items.is_empty() => items.join(ACTIVITY_SEPARATOR),
        _ => NOT_SPECIFIED.to_string(),
    }
}

/// Compose the single prompt sent for `step` given the conversation so far.
///
/// The last transcript entry is restated as the latest question; an empty
/// transcript leaves that section blank.
pub fn build_prompt(transcript: &[ChatMessage], step: &ProcessStep) -> String {
    let step_type = step
        .step_type
        .map(|t| t.to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let latest = transcript.last().map(|m| m.text.as_str()).unwrap_or_default();

    format!(
        "You are an expert Agile Coach and Scrum Master assistant.\n\
         The user is asking a question about a specific step in the Agile Process Flow: \"{label}\".\n\
         \n\
         Here is the context for this step provided in the documentation:\n\
         - Type: {step_type}\n\
         - Responsibility: {responsibility}\n\
         - Participants: {participants}\n\
         - Description: {description}\n\
         - Detailed Content: {content}\n\
         - Activities: {activities}\n\
         \n\
         Current conversation history:\n\
         {history}\n\
         \n\
         User's latest question:\n\
         {latest}\n\
         \n\
         Provide a helpful, concise, and professional answer based on standard Agile/Scrum practices and the specific context provided above.\n\
         If the context gives specific rules (like \"DOD will be written by Dev Team\"), strict adherence to that information is required.",
        label = step.label,
        responsibility = field(step.responsibility.as_deref()),
        participants = field(step.participants.as_deref()),
        description = field(step.description.as_deref()),
        content = field(step.content.as_deref()),
        activities = activities(step),
        history = render_transcript(transcript),
    )
}
