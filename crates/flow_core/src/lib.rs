//! flow_core - Core types for the AgileFlow explorer
//!
//! This crate provides the foundational types shared by the catalog and the assistant:
//! - `step` - StepType, ProcessStep, Phase and the per-type style table
//! - `chat` - ChatMessage and ChatRole for the per-step transcript
//! - `config` - API configuration loaded from files and environment
//! - `logging` - env_logger initialisation

pub mod chat;
pub mod config;
pub mod logging;
pub mod paths;
pub mod step;

// Re-export commonly used types
pub use chat::{ChatMessage, ChatRole};
pub use config::Config;
pub use step::{Icon, Palette, Phase, ProcessStep, Shape, StepStyle, StepType, LEGEND};
