//! Incremental syntax highlighting
//!
//! # Design
//! - **Rendered bytes**: classification runs over a row's rendered bytes
//!   (tabs already expanded), one tag per rendered byte.
//! - **Per-row rescans**: a row is rescanned whenever its content changes.
//! - **Block comment cascade**: the only state carried between rows is
//!   whether a block comment is still open at the end of a row. When that flag
//!   changes, the following row is rescanned, and so on until a row's flag is
//!   unchanged.

use crate::model::row::Row;
use crate::primitives::syntax::{Keyword, KeywordClass, LanguageRule};
use crossterm::style::Color;

/// Classification of a single rendered byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    BlockComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    /// Current search match (temporary override)
    Match,
}

impl Highlight {
    /// Foreground color used to draw this class, `None` for the default color
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Normal => None,
            Self::Comment | Self::BlockComment => Some(Color::DarkCyan),
            Self::Keyword1 => Some(Color::DarkYellow),
            Self::Keyword2 => Some(Color::DarkGreen),
            Self::String => Some(Color::DarkMagenta),
            Self::Number => Some(Color::DarkRed),
            Self::Match => Some(Color::DarkBlue),
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(self, Self::Comment | Self::BlockComment)
    }
}

impl From<KeywordClass> for Highlight {
    fn from(class: KeywordClass) -> Self {
        match class {
            KeywordClass::Primary => Self::Keyword1,
            KeywordClass::Secondary => Self::Keyword2,
        }
    }
}

/// Whitespace, NUL, or punctuation that delimits words and numbers
#[inline]
pub fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b || byte == 0 || b",.()+-/*=~%<>[];".contains(&byte)
}

/// Longest keyword at the start of `rest` that ends on a word boundary.
/// The end of the row counts as a separator.
fn match_keyword(rest: &[u8], keywords: &'static [Keyword]) -> Option<&'static Keyword> {
    keywords
        .iter()
        .filter(|kw| {
            let word = kw.word.as_bytes();
            rest.starts_with(word) && is_separator(rest.get(word.len()).copied().unwrap_or(0))
        })
        .max_by_key(|kw| kw.word.len())
}

/// Classify every rendered byte of `row`.
///
/// `in_comment` is the previous row's open-comment flag. Returns whether a
/// block comment is still open at the end of this row. The row's own flag is
/// left untouched.
pub(crate) fn scan_row(row: &mut Row, in_comment: bool, rule: Option<&LanguageRule>) -> bool {
    let render = &row.render;
    let hl = &mut row.highlight;
    hl.clear();
    hl.resize(render.len(), Highlight::Normal);

    let Some(rule) = rule else {
        return false;
    };

    let line_comment = rule.single_line_comment.unwrap_or("").as_bytes();
    let (block_start, block_end) = rule
        .block_comment
        .map_or((&b""[..], &b""[..]), |(s, e)| (s.as_bytes(), e.as_bytes()));
    let block_comments = !block_start.is_empty() && !block_end.is_empty();

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = in_comment;

    let mut i = 0;
    while i < render.len() {
        let c = render[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { Highlight::Normal };

        if !line_comment.is_empty()
            && in_string.is_none()
            && !in_comment
            && render[i..].starts_with(line_comment)
        {
            hl[i..].fill(Highlight::Comment);
            break;
        }

        if block_comments && in_string.is_none() {
            if in_comment {
                if render[i..].starts_with(block_end) {
                    hl[i..i + block_end.len()].fill(Highlight::BlockComment);
                    i += block_end.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    hl[i] = Highlight::BlockComment;
                    i += 1;
                }
                continue;
            } else if render[i..].starts_with(block_start) {
                hl[i..i + block_start.len()].fill(Highlight::BlockComment);
                i += block_start.len();
                in_comment = true;
                continue;
            }
        }

        if rule.highlight_strings {
            if let Some(quote) = in_string {
                hl[i] = Highlight::String;
                if c == b'\\' && i + 1 < render.len() {
                    hl[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if rule.string_quotes.contains(&c) {
                in_string = Some(c);
                hl[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if rule.highlight_numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            hl[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            if let Some(keyword) = match_keyword(&render[i..], rule.keywords) {
                let len = keyword.word.len();
                hl[i..i + len].fill(keyword.class.into());
                i += len;
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    in_comment
}

/// Rescan `rows[start]` and keep going while the open-comment flag changes.
pub(crate) fn highlight_from(rows: &mut [Row], start: usize, rule: Option<&LanguageRule>) {
    let mut at = start;
    while at < rows.len() {
        let seed = at > 0 && rows[at - 1].open_comment;
        let open = scan_row(&mut rows[at], seed, rule);
        let changed = rows[at].open_comment != open;
        rows[at].open_comment = open;
        if !changed {
            break;
        }
        tracing::trace!("Open comment flag changed on row {}, cascading", at);
        at += 1;
    }
}

/// Rescan every row in order.
pub(crate) fn highlight_all(rows: &mut [Row], rule: Option<&LanguageRule>) {
    let mut open = false;
    for row in rows.iter_mut() {
        open = scan_row(row, open, rule);
        row.open_comment = open;
    }
}
