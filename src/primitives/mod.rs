//! Low-level primitives and utilities
//!
//! This module contains syntax highlighting, the language rule table,
//! and column mapping utilities.

pub mod highlighter;
pub mod syntax;
pub mod utf8;
pub mod visual_layout;
