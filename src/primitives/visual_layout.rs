//! Raw column <-> display column mapping for a row
//!
//! Key concepts:
//! - **Raw column**: character index into a row's source bytes (0, 1, 2, ...)
//! - **Display column**: screen column after tab expansion
//! - **Source byte**: byte offset into the row's source bytes
//!
//! Every character occupies exactly one display column, except a tab, which
//! advances to the next multiple of [`TAB_STOP`]. Multi-byte characters are
//! one raw column wide; [`Row::byte_offset`] converts a raw column to the
//! matching source byte.

use crate::model::row::Row;

/// Standard tab width for terminal display
pub const TAB_STOP: usize = 8;

/// Calculate tab expansion width at a given column (always at least 1)
#[inline]
pub fn tab_expansion_width(col: usize) -> usize {
    TAB_STOP - (col % TAB_STOP)
}

/// Display width of the character starting with `lead` when drawn at `col`
#[inline]
fn advance(lead: u8, col: usize) -> usize {
    if lead == b'\t' {
        tab_expansion_width(col)
    } else {
        1
    }
}

/// Convert a raw column to the display column where that character starts.
///
/// Columns past the end of the row map to the row's total display width.
pub fn raw_to_display(row: &Row, raw_col: usize) -> usize {
    let chars = row.chars();
    row.char_starts()
        .iter()
        .take(raw_col)
        .fold(0, |col, &start| col + advance(chars[start], col))
}

/// Convert a display column back to a raw column.
///
/// A display column inside a tab's expansion maps to that tab. Display
/// columns past the end of the row clamp to the row's size.
pub fn display_to_raw(row: &Row, display_col: usize) -> usize {
    let chars = row.chars();
    let mut col = 0;
    for (raw, &start) in row.char_starts().iter().enumerate() {
        col += advance(chars[start], col);
        if col > display_col {
            return raw;
        }
    }
    row.size()
}

/// Expand tabs in `chars`, returning the rendered bytes and the rendered byte
/// offset of each display column.
pub(crate) fn expand_tabs(chars: &[u8], char_starts: &[usize]) -> (Vec<u8>, Vec<usize>) {
    let tabs = char_starts.iter().filter(|&&s| chars[s] == b'\t').count();
    let mut render = Vec::with_capacity(chars.len() + tabs * (TAB_STOP - 1));
    let mut columns = Vec::with_capacity(char_starts.len() + tabs * (TAB_STOP - 1));

    for (i, &start) in char_starts.iter().enumerate() {
        let end = char_starts.get(i + 1).copied().unwrap_or(chars.len());
        if chars[start] == b'\t' {
            for _ in 0..tab_expansion_width(columns.len()) {
                columns.push(render.len());
                render.push(b' ');
            }
        } else {
            columns.push(render.len());
            render.extend_from_slice(&chars[start..end]);
        }
    }

    (render, columns)
}
