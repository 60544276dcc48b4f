//! Process-level services: terminal setup and logging

pub mod terminal_modes;
pub mod tracing_setup;
