//! Prompt/minibuffer system for user input
//!
//! A prompt collects a line of input in the message bar. Every keystroke is
//! forwarded to the prompt's [`PromptSession`], which is how find (live search
//! while typing) and save-as (act on submit) share one input loop.

use crate::app::Editor;
use crate::input::key_translator::Key;

/// Behaviour attached to an active prompt
pub trait PromptSession: std::fmt::Debug {
    /// Called after every key with the current input.
    ///
    /// `Key::Enter` with non-empty input and `Key::Escape` are the final
    /// call for this session.
    fn step(&mut self, editor: &mut Editor, input: &str, key: Key);
}

/// Prompt state for the minibuffer
#[derive(Debug)]
pub struct Prompt {
    /// Text shown before the input (e.g., "Find: ")
    pub label: String,
    /// Text shown after the input (e.g., " (ESC to cancel)")
    pub hint: String,
    /// User's current input
    pub input: String,
    session: Box<dyn PromptSession>,
}

/// Result of feeding one key to a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Keep collecting input
    Pending,
    /// Input accepted with Enter
    Submitted,
    /// Prompt dismissed with Escape
    Cancelled,
}

impl Prompt {
    pub fn new(label: impl Into<String>, hint: impl Into<String>, session: Box<dyn PromptSession>) -> Self {
        Self {
            label: label.into(),
            hint: hint.into(),
            input: String::new(),
            session,
        }
    }

    /// Message bar text for the current input
    pub fn message(&self) -> String {
        format!("{}{}{}", self.label, self.input, self.hint)
    }

    /// Apply line-editing for `key` to the input
    pub fn edit(&mut self, key: Key) -> PromptOutcome {
        match key {
            Key::Backspace | Key::Delete | Key::Ctrl('h') => {
                self.input.pop();
                PromptOutcome::Pending
            }
            Key::Escape => PromptOutcome::Cancelled,
            Key::Enter if !self.input.is_empty() => PromptOutcome::Submitted,
            Key::Char(c) if !c.is_control() => {
                self.input.push(c);
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        }
    }

    /// Forward `key` and the current input to the session
    pub fn step(&mut self, editor: &mut Editor, key: Key) {
        self.session.step(editor, &self.input, key);
    }
}
