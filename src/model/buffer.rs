//! Row store: the ordered collection of rows making up a file
//!
//! Every mutation leaves the buffer consistent before returning:
//! - `rows[i].index == i` for every row
//! - each touched row has its render and highlight regenerated
//! - rows whose block-comment context changed as a result are rescanned
//!
//! Out-of-range positions are never an error. Row insertion and deletion
//! outside the valid range are no-ops; column positions are clamped.

use crate::model::row::Row;
use crate::primitives::highlighter::{self, Highlight};
use crate::primitives::syntax::LanguageRule;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Buffer {
    rows: Vec<Row>,
    /// Active language rule, `None` disables highlighting
    syntax: Option<&'static LanguageRule>,
    /// Number of mutations since the last load or save
    dirty: u64,
}

impl Buffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `data` into rows, stripping trailing `\n` and `\r` from each line.
    ///
    /// A final line without a newline still becomes a row; a trailing newline
    /// does not produce an extra empty row.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut buffer = Self::new();
        for line in data.split_inclusive(|&b| b == b'\n') {
            let end = line
                .iter()
                .rposition(|&b| b != b'\n' && b != b'\r')
                .map_or(0, |p| p + 1);
            buffer.insert_row(buffer.len(), &line[..end]);
        }
        buffer.dirty = 0;
        buffer
    }

    /// Read a file into a new buffer
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read(path)?;
        let buffer = Self::from_bytes(&data);
        tracing::info!("Loaded {} rows from {:?}", buffer.len(), path);
        Ok(buffer)
    }

    /// Concatenate every row followed by `\n`
    pub fn to_bytes(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.chars().len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.chars());
            out.push(b'\n');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    pub fn dirty_count(&self) -> u64 {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    pub fn syntax(&self) -> Option<&'static LanguageRule> {
        self.syntax
    }

    /// Switch language rule and rescan every row
    pub fn set_syntax(&mut self, syntax: Option<&'static LanguageRule>) {
        self.syntax = syntax;
        highlighter::highlight_all(&mut self.rows, syntax);
    }

    /// Insert a new row before `at`. No-op unless `at <= len`.
    pub fn insert_row(&mut self, at: usize, text: &[u8]) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(at, text));
        for row in &mut self.rows[at + 1..] {
            row.index += 1;
        }
        self.update_row(at);
        // The following row was scanned against the old predecessor
        if at + 1 < self.rows.len() {
            highlighter::highlight_from(&mut self.rows, at + 1, self.syntax);
        }
        self.dirty += 1;
    }

    /// Remove row `at`. No-op unless `at < len`.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        for row in &mut self.rows[at..] {
            row.index -= 1;
        }
        if at < self.rows.len() {
            highlighter::highlight_from(&mut self.rows, at, self.syntax);
        }
        self.dirty += 1;
    }

    /// Insert `ch` before raw column `at` of row `row` (column clamped)
    pub fn insert_char(&mut self, row: usize, at: usize, ch: char) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        r.insert_char(at, ch);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Append `text` to the end of row `row`
    pub fn append_text(&mut self, row: usize, text: &[u8]) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        r.append(text);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Delete the character at raw column `at` of row `row`. No-op if out of range.
    pub fn delete_char(&mut self, row: usize, at: usize) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        if r.delete_char(at) {
            self.update_row(row);
            self.dirty += 1;
        }
    }

    /// Split row `row` at raw column `at`, moving the tail into a new row below
    pub fn split_row(&mut self, row: usize, at: usize) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        let tail = r.split_off(at);
        self.update_row(row);
        self.insert_row(row + 1, &tail);
    }

    /// Regenerate render and highlight for row `at`, cascading block comment
    /// state to following rows as needed.
    pub fn update_row(&mut self, at: usize) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        row.refresh_render();
        highlighter::highlight_from(&mut self.rows, at, self.syntax);
    }

    /// Mutable access to a row's highlight tags for temporary overrides
    pub(crate) fn highlight_mut(&mut self, at: usize) -> Option<&mut Vec<Highlight>> {
        self.rows.get_mut(at).map(|r| &mut r.highlight)
    }
}
