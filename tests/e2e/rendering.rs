//! E2E tests for screen layout

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use quill::app::HELP_MESSAGE;
use quill::view::render::welcome_banner;

/// An empty buffer shows filler rows and the centred banner
#[test]
fn test_welcome_screen() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();

    assert_eq!(harness.get_row_text(0), "~");
    let banner_row = harness.get_row_text(22 / 3);
    assert!(banner_row.starts_with('~'));
    assert!(banner_row.trim_start_matches(&['~', ' '][..]).starts_with(&welcome_banner()));
    let status = harness.status_bar_text();
    assert!(status.starts_with("[No Name] - 0 lines"), "{status}");
    assert!(status.trim_end().ends_with("no ft | 1/0"), "{status}");
}

/// The banner disappears once there is text
#[test]
fn test_banner_hidden_after_typing() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("x").unwrap();
    harness.assert_screen_not_contains(&welcome_banner());
    assert_eq!(harness.get_row_text(1), "~");
}

/// Status bar: name, line count, modified flag, file type and position
#[test]
fn test_status_bar_contents() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("status.rs", "fn a() {}\nfn b() {}\n")
        .unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();

    let status = harness.status_bar_text();
    assert!(status.contains(" - 2 lines"), "{status}");
    assert!(!status.contains("(modified)"));
    assert!(status.trim_end().ends_with("rust | 2/2"), "{status}");
    assert!(harness.is_cell_inverse(0, 22));
    assert!(harness.is_cell_inverse(79, 22));
}

/// Status messages show in the message bar and a new message replaces the old
#[test]
fn test_message_bar() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.editor_mut().set_status_message(HELP_MESSAGE);
    harness.render().unwrap();
    assert_eq!(harness.message_bar_text(), HELP_MESSAGE);

    harness.editor_mut().set_status_message("short");
    harness.render().unwrap();
    assert_eq!(harness.message_bar_text(), "short");
}

/// Expired messages are not drawn
#[test]
fn test_message_bar_timeout() {
    let config = quill::config::Config {
        status_message_timeout_secs: 0,
        ..Default::default()
    };
    let mut harness = EditorTestHarness::with_config(80, 24, config).unwrap();
    harness.editor_mut().set_status_message("gone");
    harness.render().unwrap();
    assert_eq!(harness.message_bar_text(), "");
}

/// Control bytes render as inverse capital letters
#[test]
fn test_control_characters_inverse() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("ctrl.txt", "a\u{1}b\n")
        .unwrap();
    assert_eq!(harness.get_row_text(0), "aAb");
    assert!(harness.is_cell_inverse(1, 0));
    assert!(!harness.is_cell_inverse(2, 0));
}

/// The terminal cursor follows tab expansion
#[test]
fn test_cursor_after_tabs() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("tabs.txt", "\t\tx\n")
        .unwrap();
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_position(), (0, 3));
    assert_eq!(harness.screen_cursor_position(), (17, 0));
}

/// A byte that is not valid UTF-8 takes one inverse cell and leaves its neighbours intact
#[test]
fn test_malformed_byte_keeps_columns_aligned() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    let path = harness.temp_path("bad.txt").unwrap();
    std::fs::write(&path, b"\xe4int x\n").unwrap();
    harness.open_file(&path).unwrap();

    assert_eq!(harness.get_row_text(0), "?int x");
    assert!(harness.is_cell_inverse(0, 0));
    assert_eq!(harness.get_cell(1, 0).as_deref(), Some("i"));
    assert!(!harness.is_cell_inverse(1, 0));

    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (1, 0));
}

/// Double-width characters are clipped to the terminal width instead of wrapping
#[test]
fn test_wide_characters_do_not_wrap() {
    let mut harness = EditorTestHarness::new(20, 6).unwrap();
    harness
        .load_buffer_from_text("wide.txt", &format!("{}\nsecond\n", "你".repeat(15)))
        .unwrap();

    assert_eq!(harness.get_row_text(0), "你".repeat(10));
    assert_eq!(harness.get_row_text(1), "second");
    assert_eq!(harness.get_row_text(2), "~");
    assert!(harness.status_bar_text().contains(" - 2 lines"));
}
