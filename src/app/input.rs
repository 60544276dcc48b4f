//! Key dispatch for the editor

use super::Editor;
use crate::input::key_translator::Key;
use crate::model::row::Row;
use crate::primitives::utf8;
use crate::view::prompt::PromptOutcome;

impl Editor {
    /// Handle one key press. Returns `false` when the editor should exit.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return true;
        }

        let keep_running = self.dispatch(key);

        // Confirmation counters only survive consecutive presses
        if key != Key::Ctrl('q') {
            self.quit_times_left = self.config.quit_times;
        }
        if key != Key::Ctrl('s') {
            self.save_times_left = self.config.save_times;
        }
        keep_running
    }

    fn dispatch(&mut self, key: Key) -> bool {
        match key {
            Key::Enter => self.insert_newline(),
            Key::Ctrl('q') => return !self.confirm_quit(),
            Key::Ctrl('s') => self.save(),
            Key::Ctrl('f') => self.find(),
            Key::Home => self.cursor.col = 0,
            Key::End => {
                self.cursor.col = self.buffer.row(self.cursor.row).map_or(0, Row::size);
            }
            Key::Backspace | Key::Ctrl('h') => self.delete_char(),
            Key::Delete => {
                self.move_cursor(Key::Right);
                self.delete_char();
            }
            Key::PageUp | Key::PageDown => self.page(key),
            Key::Left | Key::Right | Key::Up | Key::Down => self.move_cursor(key),
            Key::Char(c) => self.insert_char(c),
            Key::Ctrl('l') | Key::Escape => {}
            Key::Ctrl(c) => tracing::trace!("Unbound key Ctrl-{}", c),
        }
        true
    }

    /// Feed `key` to the active prompt, finishing it on submit or cancel
    fn handle_prompt_key(&mut self, key: Key) {
        let Some(mut prompt) = self.prompt.take() else {
            return;
        };
        let outcome = prompt.edit(key);
        if outcome != PromptOutcome::Pending {
            self.set_status_message("");
        }

        prompt.step(self, key);

        if outcome == PromptOutcome::Pending {
            self.set_status_message(prompt.message());
            self.prompt = Some(prompt);
        } else {
            tracing::debug!("Prompt {:?} finished: {:?}", prompt.label, outcome);
        }
    }

    /// Returns true if the quit should proceed
    fn confirm_quit(&mut self) -> bool {
        if self.buffer.is_dirty() && self.quit_times_left > 0 {
            self.set_status_message(format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                self.quit_times_left
            ));
            self.quit_times_left -= 1;
            return false;
        }
        tracing::info!("Quit requested");
        true
    }

    /// Move the cursor one step in the direction of an arrow key
    pub fn move_cursor(&mut self, key: Key) {
        let row_size = self.buffer.row(self.cursor.row).map(Row::size);
        match key {
            Key::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col = utf8::prev_char_index(self.cursor.col);
                } else if self.cursor.row > 0 {
                    self.cursor.row -= 1;
                    self.cursor.col = self.buffer.row(self.cursor.row).map_or(0, Row::size);
                }
            }
            Key::Right => {
                if let Some(size) = row_size {
                    if self.cursor.col < size {
                        self.cursor.col = utf8::next_char_index(self.cursor.col, size);
                    } else {
                        self.cursor.row += 1;
                        self.cursor.col = 0;
                    }
                }
            }
            Key::Up => self.cursor.row = self.cursor.row.saturating_sub(1),
            Key::Down => {
                if self.cursor.row < self.buffer.len() {
                    self.cursor.row += 1;
                }
            }
            _ => {}
        }
        self.clamp_cursor_col();
    }

    /// Jump to the top (or bottom) of the screen, then move a screen's worth
    fn page(&mut self, key: Key) {
        let rows = self.viewport.screen_rows;
        let step = if key == Key::PageUp {
            self.cursor.row = self.viewport.row_offset;
            Key::Up
        } else {
            self.cursor.row = (self.viewport.row_offset + rows)
                .saturating_sub(1)
                .min(self.buffer.len());
            Key::Down
        };
        for _ in 0..rows {
            self.move_cursor(step);
        }
        self.clamp_cursor_col();
    }

    fn clamp_cursor_col(&mut self) {
        let size = self.buffer.row(self.cursor.row).map_or(0, Row::size);
        self.cursor.col = self.cursor.col.min(size);
    }
}
