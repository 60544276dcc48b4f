//! A single line of buffer text plus its derived render and highlight caches

use crate::primitives::highlighter::Highlight;
use crate::primitives::utf8;
use crate::primitives::visual_layout;

/// One row of the buffer.
///
/// `chars` is the authoritative source text (no trailing newline). `render`
/// and `highlight` are derived from it and are always regenerated together,
/// so `render.len() == highlight.len()` holds whenever the row is observable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Position of this row in the buffer
    pub(crate) index: usize,
    chars: Vec<u8>,
    /// Byte offset in `chars` of each character
    char_starts: Vec<usize>,
    pub(crate) render: Vec<u8>,
    /// Byte offset in `render` of each display column
    render_columns: Vec<usize>,
    pub(crate) highlight: Vec<Highlight>,
    /// A block comment begun on or before this row is still open at its end
    pub(crate) open_comment: bool,
}

impl Row {
    /// Create a row with its render cache filled and all bytes unclassified.
    /// Highlighting is the buffer's job.
    pub fn new(index: usize, text: &[u8]) -> Self {
        let mut row = Self {
            index,
            chars: text.to_vec(),
            ..Self::default()
        };
        row.refresh_render();
        row
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Source bytes
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Rendered bytes (tabs expanded)
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// One tag per rendered byte
    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    pub fn open_comment(&self) -> bool {
        self.open_comment
    }

    /// Number of characters (raw columns)
    pub fn size(&self) -> usize {
        self.char_starts.len()
    }

    /// Number of display columns
    pub fn render_width(&self) -> usize {
        self.render_columns.len()
    }

    pub(crate) fn char_starts(&self) -> &[usize] {
        &self.char_starts
    }

    /// Byte offset in `chars` of raw column `col`, clamped to the row length
    pub fn byte_offset(&self, col: usize) -> usize {
        self.char_starts.get(col).copied().unwrap_or(self.chars.len())
    }

    /// Byte offset in `render` of display column `col`, clamped to the render length
    pub fn render_offset(&self, col: usize) -> usize {
        self.render_columns
            .get(col)
            .copied()
            .unwrap_or(self.render.len())
    }

    /// Display column containing rendered byte `offset`
    pub fn display_column_at(&self, offset: usize) -> usize {
        self.render_columns
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Rendered bytes for display column `col`
    pub fn render_cell(&self, col: usize) -> &[u8] {
        &self.render[self.render_offset(col)..self.render_offset(col + 1)]
    }

    /// Splice `ch` in before raw column `at` (clamped to the row size)
    pub(crate) fn insert_char(&mut self, at: usize, ch: char) {
        let at = self.byte_offset(at.min(self.size()));
        let mut encoded = [0u8; 4];
        let bytes = ch.encode_utf8(&mut encoded).as_bytes();
        self.chars.splice(at..at, bytes.iter().copied());
    }

    pub(crate) fn append(&mut self, text: &[u8]) {
        self.chars.extend_from_slice(text);
    }

    /// Remove the character at raw column `at`. Returns false if out of range.
    pub(crate) fn delete_char(&mut self, at: usize) -> bool {
        if at >= self.size() {
            return false;
        }
        let start = self.byte_offset(at);
        let end = self.byte_offset(at + 1);
        self.chars.drain(start..end);
        true
    }

    /// Cut the row at raw column `at`, returning the bytes after it
    pub(crate) fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = self.byte_offset(at);
        self.chars.split_off(at)
    }

    /// Regenerate `render` from `chars`. Highlighting is reset to normal so
    /// the length invariant holds until the scanner runs.
    pub(crate) fn refresh_render(&mut self) {
        self.char_starts = utf8::char_starts(&self.chars);
        let (render, columns) = visual_layout::expand_tabs(&self.chars, &self.char_starts);
        self.render = render;
        self.render_columns = columns;
        self.highlight.clear();
        self.highlight.resize(self.render.len(), Highlight::Normal);
    }
}
