//! Load-time checks over a catalog.
//!
//! Every problem is collected; nothing here fails fast. The store keeps working with
//! whatever data it was given, so the report is a diagnostic for catalog authors.

use std::collections::HashSet;

use flow_core::{Phase, ProcessStep};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Step at index {index} (id: {}) is missing required field '{field}'", .id.as_deref().unwrap_or("unknown"))]
    MissingField {
        index: usize,
        id: Option<String>,
        field: &'static str,
    },

    #[error("Duplicate ID detected: '{id}' at index {index}")]
    DuplicateId { index: usize, id: String },

    #[error("Step at index {index} (id: {}) references unknown phase '{phase_id}'", .id.as_deref().unwrap_or("unknown"))]
    UnknownPhase {
        index: usize,
        id: Option<String>,
        phase_id: String,
    },

    #[error("Duplicate phase ID detected: '{id}' at index {index}")]
    DuplicatePhaseId { index: usize, id: String },
}

impl ValidationIssue {
    /// Position of the offending record in its table.
    pub fn index(&self) -> usize {
        match self {
            ValidationIssue::MissingField { index, .. }
            | ValidationIssue::DuplicateId { index, .. }
            | ValidationIssue::UnknownPhase { index, .. }
            | ValidationIssue::DuplicatePhaseId { index, .. } => *index,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn duplicate_ids(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, ValidationIssue::DuplicateId { .. }))
    }

    /// Emit the report through the `log` facade.
    pub fn log(&self) {
        if self.issues.is_empty() {
            log::debug!("[Data Validation] process catalog is valid");
            return;
        }

        log::error!(
            "[Data Validation] Found {} inconsistencies in the process catalog",
            self.issues.len()
        );
        for issue in &self.issues {
            log::error!("[Data Validation] {}", issue);
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Check required fields, id uniqueness and phase references.
pub fn validate(phases: &[Phase], steps: &[ProcessStep]) -> ValidationReport {
    let mut issues = Vec::new();

    let mut phase_ids = HashSet::new();
    for (index, phase) in phases.iter().enumerate() {
        if !phase_ids.insert(phase.id.as_str()) {
            issues.push(ValidationIssue::DuplicatePhaseId {
                index,
                id: phase.id.clone(),
            });
        }
    }

    let mut seen_ids = HashSet::new();
    for (index, step) in steps.iter().enumerate() {
        let id = non_empty(&step.id);

        match &id {
            None => issues.push(ValidationIssue::MissingField {
                index,
                id: None,
                field: "id",
            }),
            Some(id) => {
                if !seen_ids.insert(step.id.as_str()) {
                    issues.push(ValidationIssue::DuplicateId {
                        index,
                        id: id.clone(),
                    });
                }
            }
        }

        if step.label.is_empty() {
            issues.push(ValidationIssue::MissingField {
                index,
                id: id.clone(),
                field: "label",
            });
        }

        if step.step_type.is_none() {
            issues.push(ValidationIssue::MissingField {
                index,
                id: id.clone(),
                field: "type",
            });
        }

        if !phase_ids.contains(step.phase_id.as_str()) {
            issues.push(ValidationIssue::UnknownPhase {
                index,
                id,
                phase_id: step.phase_id.clone(),
            });
        }
    }

    ValidationReport { issues }
}
