//! Editor state and the operations that drive it
//!
//! [`Editor`] owns everything: the buffer, cursor, viewport, prompt and
//! confirmation counters. Every operation takes it by `&mut self`; there is no
//! global state.

mod editing;
mod file_io;
mod input;
mod render;
mod search;

pub use file_io::SaveAsSession;
pub use search::{find_match, FindSession, SearchDirection};

use crate::config::Config;
use crate::model::buffer::Buffer;
use crate::model::cursor::Cursor;
use crate::view::prompt::Prompt;
use crate::view::viewport::Viewport;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Shown in the message bar on startup
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// A message bar entry and when it was set
#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    set_at: Instant,
}

#[derive(Debug)]
pub struct Editor {
    buffer: Buffer,
    cursor: Cursor,
    viewport: Viewport,
    filename: Option<PathBuf>,
    status: Option<StatusMessage>,
    /// Active prompt, keys are routed here while it is set
    prompt: Option<Prompt>,
    quit_times_left: u32,
    save_times_left: u32,
    config: Config,
}

impl Editor {
    /// Create an editor with an empty, untitled buffer for a terminal of the given size
    pub fn new(config: Config, width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::default(),
            viewport: Viewport::new(width, height),
            filename: None,
            status: None,
            prompt: None,
            quit_times_left: config.quit_times,
            save_times_left: config.save_times,
            config,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn is_prompt_active(&self) -> bool {
        self.prompt.is_some()
    }

    /// Update terminal dimensions
    pub fn resize(&mut self, width: u16, height: u16) {
        tracing::debug!("Terminal resized to {}x{}", width, height);
        self.viewport.resize(width, height);
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            set_at: Instant::now(),
        });
    }

    /// Current message bar text, `None` once it has expired
    pub fn status_message(&self) -> Option<&str> {
        self.status_message_at(Instant::now())
    }

    fn status_message_at(&self, now: Instant) -> Option<&str> {
        let timeout = Duration::from_secs(self.config.status_message_timeout_secs);
        self.status
            .as_ref()
            .filter(|m| now.saturating_duration_since(m.set_at) < timeout)
            .map(|m| m.text.as_str())
    }

    /// Show `prompt` in the message bar and route keys to it
    pub fn start_prompt(&mut self, prompt: Prompt) {
        self.set_status_message(prompt.message());
        self.prompt = Some(prompt);
    }
}
