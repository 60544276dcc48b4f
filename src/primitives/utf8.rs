//! UTF-8 boundary helpers for raw row bytes.
//!
//! Rows store the bytes exactly as they were read from disk, so nothing here
//! assumes the input is valid UTF-8. A byte that does not begin a well-formed
//! sequence is treated as a character of its own.

/// Length of the sequence introduced by `lead`, judged from the lead byte alone.
#[inline]
pub fn char_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 1,
    }
}

/// Whether `byte` can start a character (i.e. is not a continuation byte)
#[inline]
pub fn is_start_byte(byte: u8) -> bool {
    byte & 0xc0 != 0x80
}

/// Length of the character starting at `at`, clamped to the end of `bytes`.
///
/// Truncated or malformed sequences count as a single byte.
pub fn char_len_at(bytes: &[u8], at: usize) -> usize {
    let Some(&lead) = bytes.get(at) else {
        return 0;
    };
    let len = char_len(lead);
    if len == 1 || at + len > bytes.len() {
        return 1;
    }
    if bytes[at + 1..at + len].iter().all(|&b| !is_start_byte(b)) {
        len
    } else {
        1
    }
}

/// Byte offset of every character in `bytes`, in order.
pub fn char_starts(bytes: &[u8]) -> Vec<usize> {
    let mut starts = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        starts.push(i);
        i += char_len_at(bytes, i);
    }
    starts
}

/// Index of the character following the one at `index`, saturating at `count`.
#[inline]
pub fn next_char_index(index: usize, count: usize) -> usize {
    (index + 1).min(count)
}

/// Index of the character preceding the one at `index`, saturating at 0.
#[inline]
pub fn prev_char_index(index: usize) -> usize {
    index.saturating_sub(1)
}
