//! Loading, saving and language selection

use super::Editor;
use crate::input::key_translator::Key;
use crate::model::buffer::Buffer;
use crate::model::cursor::Cursor;
use crate::primitives::syntax;
use crate::view::prompt::{Prompt, PromptSession};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

impl Editor {
    /// Load `path` into the editor. A path that does not exist yet opens an
    /// empty buffer bound to it; any other failure is returned.
    pub fn open(&mut self, path: &Path) -> io::Result<()> {
        self.buffer = match Buffer::load(path) {
            Ok(buffer) => buffer,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("{:?} does not exist, starting a new file", path);
                Buffer::new()
            }
            Err(e) => return Err(e),
        };
        self.filename = Some(path.to_path_buf());
        self.cursor = Cursor::default();
        self.viewport.row_offset = 0;
        self.viewport.col_offset = 0;
        self.select_syntax();
        self.buffer.mark_clean();
        Ok(())
    }

    /// Pick a language rule for the current filename and rescan every row
    pub fn select_syntax(&mut self) {
        let rule = if self.config.syntax_highlighting {
            self.filename.as_deref().and_then(syntax::detect)
        } else {
            None
        };
        self.buffer.set_syntax(rule);
    }

    /// Save to the current filename, prompting for one if the buffer is untitled
    pub fn save(&mut self) {
        let Some(path) = self.filename.clone() else {
            self.start_prompt(Prompt::new(
                "Save as: ",
                " (ESC to cancel)",
                Box::new(SaveAsSession),
            ));
            return;
        };

        if !has_extension(&path) && self.buffer.syntax().is_none() && self.save_times_left > 0 {
            self.set_status_message(format!(
                "WARNING: no file extension. Press Ctrl-S {} more times to confirm save.",
                self.save_times_left
            ));
            self.save_times_left -= 1;
            return;
        }

        let data = self.buffer.to_bytes();
        match write_file(&path, &data) {
            Ok(()) => {
                tracing::info!("Saved {} bytes to {:?}", data.len(), path);
                self.buffer.mark_clean();
                self.set_status_message(format!("{} bytes written to disk", data.len()));
            }
            Err(e) => {
                tracing::warn!("Failed to save {:?}: {}", path, e);
                self.set_status_message(format!("Can't save! I/O error: {e}"));
            }
        }
    }
}

/// A trailing dot does not count as an extension
fn has_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| !ext.is_empty())
}

/// Truncate `path` to the new length and write `data` over it
fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut file = options.open(path)?;
    file.set_len(data.len() as u64)?;
    file.write_all(data)?;
    file.flush()
}

/// Prompt session that names an untitled buffer and saves it
#[derive(Debug)]
pub struct SaveAsSession;

impl PromptSession for SaveAsSession {
    fn step(&mut self, editor: &mut Editor, input: &str, key: Key) {
        match key {
            Key::Enter if !input.is_empty() => {
                editor.filename = Some(PathBuf::from(input));
                editor.select_syntax();
                editor.save();
            }
            Key::Escape => editor.set_status_message("Save aborted"),
            _ => {}
        }
    }
}
