//! Checks over the built-in Agile catalog.

use std::collections::HashSet;

use flow_catalog::{reference_phases, reference_steps, reference_store, ProcessModelStore};
use flow_core::StepType;

fn ids_in(store: &ProcessModelStore, phase_id: &str) -> Vec<String> {
    store
        .steps_in_phase(phase_id)
        .iter()
        .map(|step| step.id.clone())
        .collect()
}

#[test]
fn reference_catalog_is_valid() {
    let store = reference_store();
    assert!(
        store.validation_report().is_valid(),
        "unexpected issues: {:?}",
        store.validation_report().issues()
    );
    assert_eq!(store.phases().len(), 5);
    assert_eq!(store.steps().len(), 31);
}

#[test]
fn every_step_references_exactly_one_phase() {
    let phases = reference_phases();
    for step in reference_steps() {
        let matches = phases.iter().filter(|p| p.id == step.phase_id).count();
        assert_eq!(matches, 1, "step {} -> {}", step.id, step.phase_id);
    }
}

#[test]
fn ids_are_unique() {
    let steps = reference_steps();
    let unique: HashSet<&str> = steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(unique.len(), steps.len());
}

#[test]
fn setup_phase_in_declared_order() {
    assert_eq!(
        ids_in(reference_store(), "setup"),
        vec![
            "methodology",
            "kick-off",
            "vision-statement",
            "team-charter",
            "initial-backlog"
        ]
    );
}

#[test]
fn every_phase_preserves_catalog_order() {
    let store = reference_store();
    let all = reference_steps();

    for phase in store.phases() {
        let expected: Vec<String> = all
            .iter()
            .filter(|s| s.phase_id == phase.id)
            .map(|s| s.id.clone())
            .collect();
        assert_eq!(ids_in(store, &phase.id), expected, "phase {}", phase.id);
    }
}

#[test]
fn phases_partition_the_catalog() {
    let store = reference_store();
    let total: usize = store
        .phases()
        .iter()
        .map(|p| store.steps_in_phase(&p.id).len())
        .sum();
    assert_eq!(total, store.steps().len());
}

#[test]
fn selection_resolves_full_record() {
    let step = reference_store().step("sprint-planning").expect("sprint-planning");
    assert_eq!(step.label, "SPRINT PLANNING MEETING");
    assert_eq!(step.step_type, Some(StepType::Meeting));
    assert_eq!(step.activities.as_ref().map(Vec::len), Some(5));
    assert_eq!(
        step.participants.as_deref(),
        Some("Scrum Team (PO, Dev Team, SM)")
    );
}

#[test]
fn board_has_five_numbered_columns_with_sprint_loop() {
    let board = reference_store().board();

    let labels: Vec<&str> = board.iter().map(|c| c.phase.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Initiation",
            "Setup & Kickoff",
            "Planning & Roadmap",
            "Sprint Cycle",
            "Release & Closure"
        ]
    );

    let loops: Vec<usize> = board.iter().filter(|c| c.is_loop()).map(|c| c.position).collect();
    assert_eq!(loops, vec![4]);
    assert!(!board.last().expect("columns").has_next);
    assert_eq!(board[3].steps.len(), 10);
}

#[test]
fn terminal_steps_close_the_flow() {
    let terminals: Vec<&str> = reference_store()
        .steps()
        .iter()
        .filter(|s| s.step_type == Some(StepType::Terminal))
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(terminals, vec!["go-live", "project-closure"]);
}
