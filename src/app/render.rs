//! Frame composition for the editor

use super::Editor;
use crate::primitives::visual_layout;
use crate::view::render::{self, StatusLine};
use crossterm::{cursor, queue};
use std::io;

impl Editor {
    /// Recompute the cursor's display column and scroll it into view
    pub fn scroll(&mut self) {
        self.cursor.display_col = self
            .buffer
            .row(self.cursor.row)
            .map_or(0, |row| visual_layout::raw_to_display(row, self.cursor.col));
        self.viewport.scroll_to(self.cursor.row, self.cursor.display_col);
    }

    /// Build one complete frame. The result is meant to be written to the
    /// terminal in a single call.
    pub fn refresh_screen(&mut self) -> io::Result<Vec<u8>> {
        self.scroll();

        let mut out = Vec::with_capacity(4096);
        queue!(out, cursor::Hide, cursor::MoveTo(0, 0))?;
        render::draw_rows(&mut out, &self.buffer, &self.viewport)?;

        let file_name = self.filename.as_ref().map(|p| p.to_string_lossy());
        let status = StatusLine {
            file_name: file_name.as_deref(),
            file_type: self.buffer.syntax().map(|rule| rule.file_type),
            line_count: self.buffer.len(),
            cursor_row: self.cursor.row,
            modified: self.buffer.is_dirty(),
        };
        render::draw_status_bar(&mut out, &status, self.viewport.screen_cols)?;
        render::draw_message_bar(&mut out, self.status_message(), self.viewport.screen_cols)?;

        let x = self.cursor.display_col.saturating_sub(self.viewport.col_offset);
        let y = self.cursor.row.saturating_sub(self.viewport.row_offset);
        queue!(
            out,
            cursor::MoveTo(x.min(u16::MAX as usize) as u16, y.min(u16::MAX as usize) as u16),
            cursor::Show
        )?;
        Ok(out)
    }
}
