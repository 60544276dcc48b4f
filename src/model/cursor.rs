//! Cursor position within the buffer

/// Cursor position in the buffer.
///
/// `row == buffer.len()` is the synthetic end-of-file position. `col` is a
/// raw column and may be one past the last character of the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
    /// Display column of `col`, recomputed once per frame before drawing
    pub display_col: usize,
}

