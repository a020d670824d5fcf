//! Process model store for the AgileFlow explorer.
//!
//! The catalog is built once from a literal table, validated, and then only read.

pub mod board;
pub mod reference;
pub mod store;
pub mod validation;

pub use board::PhaseColumn;
pub use reference::{reference_phases, reference_steps, reference_store};
pub use store::ProcessModelStore;
pub use validation::{validate, ValidationIssue, ValidationReport};
