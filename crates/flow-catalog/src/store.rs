use std::collections::HashMap;

use flow_core::{Phase, ProcessStep};

use crate::board::PhaseColumn;
use crate::validation::{validate, ValidationReport};

/// Read-only catalog of phases and steps.
///
/// Records live in declaration order in a single arena; the id and phase indexes
/// point into it. There is no mutation API after construction.
#[derive(Debug, Clone)]
pub struct ProcessModelStore {
    phases: Vec<Phase>,
    steps: Vec<ProcessStep>,
    by_id: HashMap<String, usize>,
    by_phase: HashMap<String, Vec<usize>>,
    report: ValidationReport,
}

impl ProcessModelStore {
    /// Build the store and run the validation pass once.
    ///
    /// Validation problems are logged and kept in [`Self::validation_report`]; the
    /// store is usable either way.
    pub fn new(phases: Vec<Phase>, steps: Vec<ProcessStep>) -> Self {
        let report = validate(&phases, &steps);
        report.log();

        let mut by_id = HashMap::with_capacity(steps.len());
        let mut by_phase: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, step) in steps.iter().enumerate() {
            if !step.id.is_empty() {
                // Duplicates resolve to the first declaration.
                by_id.entry(step.id.clone()).or_insert(index);
            }
            by_phase
                .entry(step.phase_id.clone())
                .or_default()
                .push(index);
        }

        log::debug!(
            "Process catalog loaded: {} phases, {} steps",
            phases.len(),
            steps.len()
        );

        Self {
            phases,
            steps,
            by_id,
            by_phase,
            report,
        }
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn steps(&self) -> &[ProcessStep] {
        &self.steps
    }

    pub fn validation_report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn phase(&self, phase_id: &str) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.id == phase_id)
    }

    /// Resolve a selected step id to its record.
    pub fn step(&self, id: &str) -> Option<&ProcessStep> {
        self.by_id.get(id).map(|&index| &self.steps[index])
    }

    /// Steps whose `phase_id` equals `phase_id`, in declaration order.
    ///
    /// Unknown phases yield an empty list.
    pub fn steps_in_phase(&self, phase_id: &str) -> Vec<&ProcessStep> {
        self.by_phase
            .get(phase_id)
            .map(|indices| indices.iter().map(|&index| &self.steps[index]).collect())
            .unwrap_or_default()
    }

    /// One column per phase, left to right.
    pub fn board(&self) -> Vec<PhaseColumn<'_>> {
        let count = self.phases.len();
        self.phases
            .iter()
            .enumerate()
            .map(|(index, phase)| PhaseColumn {
                position: index + 1,
                phase,
                steps: self.steps_in_phase(&phase.id),
                has_next: index + 1 < count,
            })
            .collect()
    }
}
