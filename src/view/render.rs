//! Frame drawing
//!
//! All drawing goes into one growable byte buffer which the caller writes to
//! the terminal in a single call, bracketed by cursor hide/show.

use crate::model::buffer::Buffer;
use crate::view::viewport::Viewport;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// Banner shown on an empty buffer
pub fn welcome_banner() -> String {
    format!("Quill editor -- version {}", env!("CARGO_PKG_VERSION"))
}

/// Status bar contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine<'a> {
    pub file_name: Option<&'a str>,
    pub file_type: Option<&'a str>,
    pub line_count: usize,
    pub cursor_row: usize,
    pub modified: bool,
}

/// Glyph for a control byte drawn in inverse video
#[inline]
pub fn control_glyph(byte: u8) -> char {
    if byte <= 26 {
        (b'@' + byte) as char
    } else {
        '?'
    }
}

#[inline]
fn is_control(byte: u8) -> bool {
    byte < 0x20 || byte == 0x7f
}

/// Terminal cells taken by one display column's bytes.
/// Bytes that are not valid UTF-8 are drawn as a single glyph.
fn terminal_width(cell: &[u8]) -> usize {
    match std::str::from_utf8(cell).ok().and_then(|s| s.chars().next()) {
        Some(ch) if !ch.is_control() => ch.width().unwrap_or(1),
        _ => 1,
    }
}

/// First `max` characters of `s`
fn truncate_chars(s: &str, max: usize) -> &str {
    s.char_indices().nth(max).map_or(s, |(end, _)| &s[..end])
}

/// Draw the text area: one line per visible row, `~` past the end of the file.
pub fn draw_rows<W: Write>(out: &mut W, buffer: &Buffer, viewport: &Viewport) -> io::Result<()> {
    for y in 0..viewport.screen_rows {
        let file_row = y + viewport.row_offset;
        match buffer.row(file_row) {
            None => {
                if buffer.is_empty() && y == viewport.screen_rows / 3 {
                    let banner = welcome_banner();
                    let banner = truncate_chars(&banner, viewport.screen_cols);
                    let mut padding = (viewport.screen_cols - banner.chars().count()) / 2;
                    if padding > 0 {
                        queue!(out, Print('~'))?;
                        padding -= 1;
                    }
                    queue!(out, Print(" ".repeat(padding)), Print(banner))?;
                } else {
                    queue!(out, Print('~'))?;
                }
            }
            Some(row) => {
                let width = row.render_width();
                let start = viewport.col_offset.min(width);
                let highlight = row.highlight();
                let mut current: Option<Color> = None;
                let mut cells_used = 0;

                for col in start..width {
                    let cell = row.render_cell(col);
                    let cell_width = terminal_width(cell);
                    if cells_used + cell_width > viewport.screen_cols {
                        break;
                    }
                    cells_used += cell_width;

                    let class = highlight[row.render_offset(col)];
                    if cell.len() == 1 && (is_control(cell[0]) || !cell[0].is_ascii()) {
                        queue!(
                            out,
                            SetAttribute(Attribute::Reverse),
                            Print(control_glyph(cell[0])),
                            SetAttribute(Attribute::Reset)
                        )?;
                        if let Some(color) = current {
                            queue!(out, SetForegroundColor(color))?;
                        }
                        continue;
                    }
                    let color = class.color();
                    if color != current {
                        queue!(out, SetForegroundColor(color.unwrap_or(Color::Reset)))?;
                        current = color;
                    }
                    out.write_all(cell)?;
                }
                queue!(out, SetForegroundColor(Color::Reset))?;
            }
        }
        queue!(out, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
    }
    Ok(())
}

/// Draw the inverse-video status bar
pub fn draw_status_bar<W: Write>(out: &mut W, status: &StatusLine<'_>, cols: usize) -> io::Result<()> {
    let left = format!(
        "{:.20} - {} lines {}",
        status.file_name.unwrap_or("[No Name]"),
        status.line_count,
        if status.modified { "(modified)" } else { "" }
    );
    let right = format!(
        "{} | {}/{}",
        status.file_type.unwrap_or("no ft"),
        status.cursor_row + 1,
        status.line_count
    );

    let left = truncate_chars(&left, cols);
    let right_len = right.chars().count();
    let mut len = left.chars().count();

    queue!(out, SetAttribute(Attribute::Reverse), Print(left))?;
    while len < cols {
        if cols - len == right_len {
            queue!(out, Print(&right))?;
            break;
        }
        queue!(out, Print(' '))?;
        len += 1;
    }
    queue!(out, SetAttribute(Attribute::Reset), Print("\r\n"))?;
    Ok(())
}

/// Draw the message bar. `message` is `None` once the message has expired.
pub fn draw_message_bar<W: Write>(out: &mut W, message: Option<&str>, cols: usize) -> io::Result<()> {
    queue!(out, Clear(ClearType::UntilNewLine))?;
    if let Some(message) = message.filter(|m| !m.is_empty()) {
        queue!(out, Print(truncate_chars(message, cols)))?;
    }
    Ok(())
}
