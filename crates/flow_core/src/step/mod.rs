//! Process steps, phases and their presentation categories.

mod style;
mod types;

pub use style::{Icon, Palette, Shape, StepStyle, LEGEND};
pub use types::{Phase, ProcessStep, StepType};
