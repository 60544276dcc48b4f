//! Quill: a small terminal text editor
//!
//! The library holds the whole editor; the `quill` binary only wires it to a
//! real terminal. See [`app::Editor`] for the entry point.

pub mod app;
pub mod config;
pub mod input;
pub mod model;
pub mod primitives;
pub mod services;
pub mod view;
