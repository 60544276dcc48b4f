//! Input translation

pub mod key_translator;
