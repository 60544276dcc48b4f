//! Character and line editing at the cursor

use super::Editor;
use crate::model::row::Row;

impl Editor {
    /// Insert `ch` at the cursor, creating a row first if the cursor is at
    /// the end-of-file position.
    pub fn insert_char(&mut self, ch: char) {
        if self.cursor.row == self.buffer.len() {
            self.buffer.insert_row(self.buffer.len(), b"");
        }
        self.buffer.insert_char(self.cursor.row, self.cursor.col, ch);
        self.cursor.col += 1;
    }

    /// Split the current row at the cursor and move to the start of the new row
    pub fn insert_newline(&mut self) {
        if self.cursor.col == 0 {
            self.buffer.insert_row(self.cursor.row, b"");
        } else {
            self.buffer.split_row(self.cursor.row, self.cursor.col);
        }
        self.cursor.row += 1;
        self.cursor.col = 0;
    }

    /// Delete the character before the cursor. At the start of a row the row
    /// is joined onto the previous one.
    pub fn delete_char(&mut self) {
        if self.cursor.row >= self.buffer.len() {
            return;
        }
        if self.cursor.col == 0 && self.cursor.row == 0 {
            return;
        }

        if self.cursor.col > 0 {
            self.buffer.delete_char(self.cursor.row, self.cursor.col - 1);
            self.cursor.col -= 1;
        } else {
            let prev = self.cursor.row - 1;
            let joined = self
                .buffer
                .row(self.cursor.row)
                .map(|r| r.chars().to_vec())
                .unwrap_or_default();
            self.cursor.col = self.buffer.row(prev).map_or(0, Row::size);
            self.buffer.append_text(prev, &joined);
            self.buffer.delete_row(self.cursor.row);
            self.cursor.row = prev;
        }
    }
}
