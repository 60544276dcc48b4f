//! Incremental find
//!
//! The search runs on every keystroke of the find prompt. Arrow keys step to
//! the next or previous matching row, wrapping at either end of the buffer.
//! The matched text is painted with [`Highlight::Match`] and the row's previous
//! highlighting is put back on the next keystroke.

use super::Editor;
use crate::input::key_translator::Key;
use crate::model::buffer::Buffer;
use crate::model::cursor::Cursor;
use crate::primitives::highlighter::Highlight;
use crate::primitives::visual_layout;
use crate::view::prompt::{Prompt, PromptSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Find the next row containing `query` in its rendered text, starting after
/// `last_match` and wrapping around. Returns the row and the byte offset of
/// the first occurrence within that row's render.
pub fn find_match(
    buffer: &Buffer,
    query: &[u8],
    last_match: Option<usize>,
    direction: SearchDirection,
) -> Option<(usize, usize)> {
    let len = buffer.len();
    if query.is_empty() || len == 0 {
        return None;
    }

    let mut current = last_match;
    for _ in 0..len {
        let next = match (current, direction) {
            (None, SearchDirection::Forward) => 0,
            (None, SearchDirection::Backward) => len - 1,
            (Some(r), SearchDirection::Forward) if r + 1 >= len => 0,
            (Some(r), SearchDirection::Forward) => r + 1,
            (Some(0), SearchDirection::Backward) => len - 1,
            (Some(r), SearchDirection::Backward) => (r - 1).min(len - 1),
        };
        current = Some(next);

        let render = buffer.row(next)?.render();
        if let Some(offset) = render.windows(query.len()).position(|w| w == query) {
            return Some((next, offset));
        }
    }
    None
}

#[derive(Debug, Clone)]
struct SavedHighlight {
    row: usize,
    highlight: Vec<Highlight>,
}

/// Prompt session driving an incremental search
#[derive(Debug)]
pub struct FindSession {
    last_match: Option<usize>,
    direction: SearchDirection,
    saved_highlight: Option<SavedHighlight>,
    saved_cursor: Cursor,
    saved_offsets: (usize, usize),
}

impl FindSession {
    /// Remember where the editor was so Escape can go back there
    pub fn new(editor: &Editor) -> Self {
        Self {
            last_match: None,
            direction: SearchDirection::Forward,
            saved_highlight: None,
            saved_cursor: editor.cursor,
            saved_offsets: (editor.viewport.row_offset, editor.viewport.col_offset),
        }
    }

    fn restore_highlight(&mut self, buffer: &mut Buffer) {
        if let Some(saved) = self.saved_highlight.take() {
            if let Some(highlight) = buffer.highlight_mut(saved.row) {
                *highlight = saved.highlight;
            }
        }
    }
}

impl PromptSession for FindSession {
    fn step(&mut self, editor: &mut Editor, query: &str, key: Key) {
        self.restore_highlight(&mut editor.buffer);

        match key {
            Key::Enter | Key::Escape => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
                if key == Key::Escape {
                    editor.cursor = self.saved_cursor;
                    (editor.viewport.row_offset, editor.viewport.col_offset) = self.saved_offsets;
                }
                return;
            }
            Key::Right | Key::Down => self.direction = SearchDirection::Forward,
            Key::Left | Key::Up => self.direction = SearchDirection::Backward,
            _ => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
            }
        }
        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }

        let Some((row_index, offset)) =
            find_match(&editor.buffer, query.as_bytes(), self.last_match, self.direction)
        else {
            return;
        };
        tracing::trace!("Match for {:?} in row {} at {}", query, row_index, offset);
        self.last_match = Some(row_index);

        let Some(row) = editor.buffer.row(row_index) else {
            return;
        };
        editor.cursor.row = row_index;
        editor.cursor.col = visual_layout::display_to_raw(row, row.display_column_at(offset));
        // Past the last row, so the next scroll puts the match at the top
        editor.viewport.row_offset = editor.buffer.len();

        if let Some(highlight) = editor.buffer.highlight_mut(row_index) {
            self.saved_highlight = Some(SavedHighlight {
                row: row_index,
                highlight: highlight.clone(),
            });
            let end = (offset + query.len()).min(highlight.len());
            highlight[offset..end].fill(Highlight::Match);
        }
    }
}

impl Editor {
    /// Open the find prompt
    pub fn find(&mut self) {
        let session = FindSession::new(self);
        self.start_prompt(Prompt::new(
            "Find: ",
            " (use ESC/Arrows/Enter)",
            Box::new(session),
        ));
    }
}
