//! E2E tests for incremental search

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use quill::primitives::highlighter::Highlight;

fn start_search(harness: &mut EditorTestHarness, query: &str) {
    harness
        .send_key(KeyCode::Char('f'), KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text(query).unwrap();
}

/// Typing a query jumps to the first match and shows the prompt
#[test]
fn test_basic_search_forward() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("search.txt", "hello world\nfoo bar\nhello again\nbaz\n")
        .unwrap();

    harness
        .send_key(KeyCode::Char('f'), KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(
        harness.message_bar_text(),
        "Find:  (use ESC/Arrows/Enter)"
    );

    harness.type_text("bar").unwrap();
    assert_eq!(harness.message_bar_text(), "Find: bar (use ESC/Arrows/Enter)");
    assert_eq!(harness.cursor_position(), (1, 4));
}

/// Forward search wraps 0, 1, 2, 0 and reversing from 0 visits 2, 1, 0
#[test]
fn test_search_wraps_cyclically() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("wrap.txt", "a x\nb x\nc x\n")
        .unwrap();

    start_search(&mut harness, "x");
    assert_eq!(harness.cursor_position().0, 0);

    let mut visited = Vec::new();
    for _ in 0..3 {
        harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
        visited.push(harness.cursor_position().0);
    }
    assert_eq!(visited, vec![1, 2, 0]);

    let mut visited = Vec::new();
    for _ in 0..3 {
        harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
        visited.push(harness.cursor_position().0);
    }
    assert_eq!(visited, vec![2, 1, 0]);
}

/// The match is painted and the row's highlighting is restored exactly on exit
#[test]
fn test_match_highlight_restored_after_enter() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("hl.c", "int x = 42; // answer\n")
        .unwrap();
    let before: Vec<Highlight> = harness.editor().buffer().row(0).unwrap().highlight().to_vec();

    start_search(&mut harness, "42");
    let during = harness.editor().buffer().row(0).unwrap().highlight();
    assert_eq!(&during[8..10], &[Highlight::Match, Highlight::Match]);
    assert_eq!(harness.get_cell_fg(8, 0), Some(vt100::Color::Idx(4)));

    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert!(!harness.editor().is_prompt_active());
    assert_eq!(harness.editor().buffer().row(0).unwrap().highlight(), before.as_slice());
    assert_eq!(harness.get_cell_fg(8, 0), Some(vt100::Color::Idx(1)));
    // Enter keeps the cursor on the match
    assert_eq!(harness.cursor_position(), (0, 8));
}

/// Escape puts the cursor and viewport back where the search started
#[test]
fn test_escape_restores_cursor_and_viewport() {
    let mut harness = EditorTestHarness::new(40, 12).unwrap();
    let mut text: String = (0..60).map(|i| format!("line {i}\n")).collect();
    text.push_str("needle\n");
    harness.load_buffer_from_text("esc.txt", &text).unwrap();
    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::NONE, 3)
        .unwrap();

    start_search(&mut harness, "needle");
    assert_eq!(harness.cursor_position(), (60, 0));
    assert_eq!(harness.get_row_text(0), "needle");

    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_position(), (3, 0));
    assert_eq!(harness.editor().viewport().row_offset, 0);
    assert_eq!(harness.get_row_text(0), "line 0");
    harness.assert_screen_not_contains("Find:");
}

/// Editing the query restarts the scan from the top
#[test]
fn test_query_edit_restarts_scan() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("restart.txt", "ab\nab\nabc\n")
        .unwrap();

    start_search(&mut harness, "ab");
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_position().0, 1);

    harness.type_text("c").unwrap();
    assert_eq!(harness.cursor_position().0, 2);

    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_position().0, 0);
}

/// A match after a tab lands on the right raw column
#[test]
fn test_match_after_tab() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("tab.txt", "\tfind me\n")
        .unwrap();
    start_search(&mut harness, "me");
    assert_eq!(harness.cursor_position(), (0, 6));
    assert_eq!(harness.screen_cursor_position(), (13, 0));
}

/// No match leaves the cursor alone
#[test]
fn test_no_match() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.load_buffer_from_text("none.txt", "abc\n").unwrap();
    start_search(&mut harness, "zzz");
    assert_eq!(harness.cursor_position(), (0, 0));
    assert!(harness.editor().is_prompt_active());
}
