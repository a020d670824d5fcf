//! Column view consumed by the diagram renderer.

use flow_core::{Phase, ProcessStep};
use serde::Serialize;

/// Phase whose column is drawn as a loop instead of a vertical stack.
pub const LOOP_PHASE_ID: &str = "sprint";

#[derive(Debug, Clone, Serialize)]
pub struct PhaseColumn<'a> {
    /// 1-based position shown in the column header.
    pub position: usize,
    pub phase: &'a Phase,
    pub steps: Vec<&'a ProcessStep>,
    /// A connector arrow leads to the next column.
    pub has_next: bool,
}

impl PhaseColumn<'_> {
    pub fn is_loop(&self) -> bool {
        self.phase.id == LOOP_PHASE_ID
    }

    /// Connectors are drawn between consecutive steps of a stacked column.
    pub fn connector_count(&self) -> usize {
        if self.is_loop() {
            0
        } else {
            self.steps.len().saturating_sub(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_core::StepType;

    #[test]
    fn stacked_column_connects_neighbours() {
        let phase = Phase::new("planning", "Planning");
        let a = ProcessStep::new("a", "A", StepType::Document, "planning");
        let b = ProcessStep::new("b", "B", StepType::Document, "planning");
        let column = PhaseColumn {
            position: 1,
            phase: &phase,
            steps: vec![&a, &b],
            has_next: true,
        };

        assert!(!column.is_loop());
        assert_eq!(column.connector_count(), 1);
    }

    #[test]
    fn sprint_column_is_a_loop() {
        let phase = Phase::new(LOOP_PHASE_ID, "Sprint Cycle");
        let column = PhaseColumn {
            position: 4,
            phase: &phase,
            steps: Vec::new(),
            has_next: true,
        };

        assert!(column.is_loop());
        assert_eq!(column.connector_count(), 0);
    }

    #[test]
    fn column_serializes_for_the_renderer() {
        let phase = Phase::new("release", "Release & Closure");
        let step = ProcessStep::new("go-live", "Go-Live", StepType::Terminal, "release");
        let column = PhaseColumn {
            position: 5,
            phase: &phase,
            steps: vec![&step],
            has_next: false,
        };

        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(json["phase"]["label"], "Release & Closure");
        assert_eq!(json["steps"][0]["type"], "TERMINAL");
        assert_eq!(json["steps"][0]["phaseId"], "release");
    }
}
