//! E2E tests for text editing

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

/// Typing into a new buffer creates the first row
#[test]
fn test_basic_editing_workflow() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.assert_buffer_content("");
    harness.assert_screen_contains("[No Name]");

    harness.type_text("Hello").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.type_text("World").unwrap();

    harness.assert_buffer_content("Hello\nWorld\n");
    assert_eq!(harness.cursor_position(), (1, 5));
    harness.assert_screen_contains("Hello");
    harness.assert_screen_contains("World");
    harness.assert_screen_contains("2 lines (modified)");
}

/// Enter in the middle of a row splits it
#[test]
fn test_enter_splits_line() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("abcdef").unwrap();
    harness
        .send_key_repeat(KeyCode::Left, KeyModifiers::NONE, 3)
        .unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    harness.assert_buffer_content("abc\ndef\n");
    assert_eq!(harness.cursor_position(), (1, 0));
}

/// Backspace at column 0 joins the row onto the one above and leaves the
/// cursor at the old end of that row
#[test]
fn test_backspace_at_line_start_joins_rows() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.load_buffer_from_text("join.txt", "first\nsecond\nthird\n").unwrap();

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();

    harness.assert_buffer_content("firstsecond\nthird\n");
    assert_eq!(harness.cursor_position(), (0, 5));
    for (i, row) in harness.editor().buffer().rows().iter().enumerate() {
        assert_eq!(row.index(), i);
    }
}

/// Ctrl-H is an alias for Backspace
#[test]
fn test_ctrl_h_deletes_backward() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("abc").unwrap();
    harness
        .send_key(KeyCode::Char('h'), KeyModifiers::CONTROL)
        .unwrap();
    harness.assert_buffer_content("ab\n");
}

/// Delete removes the character under the cursor and joins at row end
#[test]
fn test_delete_forward() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.load_buffer_from_text("del.txt", "ab\ncd\n").unwrap();

    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("b\ncd\n");

    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("bcd\n");
    assert_eq!(harness.cursor_position(), (0, 1));
}

/// Backspace at the very start of the buffer does nothing
#[test]
fn test_backspace_at_buffer_start_is_noop() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.load_buffer_from_text("start.txt", "abc\n").unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("abc\n");
    assert!(!harness.editor().buffer().is_dirty());
}

/// Multibyte characters are edited one character at a time
#[test]
fn test_multibyte_editing() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("你好世界").unwrap();
    assert_eq!(harness.cursor_position(), (0, 4));

    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("你好界\n");
    assert_eq!(harness.cursor_position(), (0, 2));
    harness.assert_screen_contains("你好界");
}

/// Tab is inserted as a raw tab and rendered to the next tab stop
#[test]
fn test_tab_insert() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("a").unwrap();
    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    harness.type_text("b").unwrap();

    harness.assert_buffer_content("a\tb\n");
    assert_eq!(harness.get_row_text(0), "a       b");
    assert_eq!(harness.screen_cursor_position(), (9, 0));
}
