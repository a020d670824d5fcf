use flow_core::StepType;

/// Appended to every list of suggestions.
pub const COMMON_PROMPTS: [&str; 2] = ["Explain this step simply", "Why is this important?"];

/// Starter questions offered for a step of the given type.
pub fn suggested_prompts(step_type: Option<StepType>) -> Vec<&'static str> {
    let specific: &[&'static str] = match step_type {
        Some(StepType::Document) => &["What should be in this document?", "Who creates this?"],
        Some(StepType::Meeting) => &[
            "What is the agenda?",
            "Who needs to attend?",
            "What are the outcomes?",
        ],
        Some(StepType::Workshop) => &["How do we prepare?", "What activities happen here?"],
        Some(StepType::Decision) => &[
            "What are the criteria?",
            "Who decides this?",
            "What if the answer is No?",
        ],
        Some(StepType::Action) => &["What tasks are involved?", "How to measure progress?"],
        Some(StepType::Terminal) => &["What happens next?", "Is this the final step?"],
        Some(StepType::Phase) | None => {
            &["What are the key inputs?", "What are the expected outputs?"]
        }
    };

    specific.iter().chain(COMMON_PROMPTS.iter()).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_ends_with_common_prompts() {
        for step_type in StepType::ALL.into_iter().map(Some).chain([None]) {
            let prompts = suggested_prompts(step_type);
            assert!(prompts.len() >= 4, "{step_type:?}");
            assert_eq!(&prompts[prompts.len() - 2..], &COMMON_PROMPTS[..]);
        }
    }

    #[test]
    fn decision_prompts() {
        assert_eq!(
            suggested_prompts(Some(StepType::Decision)),
            vec![
                "What are the criteria?",
                "Who decides this?",
                "What if the answer is No?",
                "Explain this step simply",
                "Why is this important?",
            ]
        );
    }

    #[test]
    fn untyped_steps_get_default_list() {
        assert_eq!(
            suggested_prompts(None),
            suggested_prompts(Some(StepType::Phase))
        );
    }
}
