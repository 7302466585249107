//! Unit tests for the format picker state machine
//!
//! Only the selection logic is covered here; rendering needs a real terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pinetree::cli::{PickerAction, PickerState, CANCELLED_EXIT_CODE};

fn options(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_starts_at_first_option() {
    let state = PickerState::new(options(&["flac", "wav", "*"])).unwrap();
    assert_eq!(state.selected(), 0);
    assert_eq!(state.selected_option(), "flac");
}

#[test]
fn test_empty_options_rejected() {
    assert!(PickerState::new(Vec::new()).is_none());
}

#[test]
fn test_up_clamps_at_first() {
    let mut state = PickerState::new(options(&["mp3", "wav", "ogg"])).unwrap();

    assert_eq!(state.handle_key(key(KeyCode::Up)), PickerAction::Stay);
    assert_eq!(state.selected(), 0);
}

#[test]
fn test_down_clamps_at_last() {
    let mut state = PickerState::new(options(&["mp3", "wav", "ogg"])).unwrap();
    state.move_down();
    state.move_down();
    assert_eq!(state.selected(), 2);

    assert_eq!(state.handle_key(key(KeyCode::Down)), PickerAction::Stay);
    assert_eq!(state.selected(), 2);
}

#[test]
fn test_enter_confirms_highlighted_option() {
    let mut state = PickerState::new(options(&["mp3", "wav", "ogg"])).unwrap();
    state.handle_key(key(KeyCode::Down));

    assert_eq!(
        state.handle_key(key(KeyCode::Enter)),
        PickerAction::Confirm("wav".to_string())
    );
}

#[test]
fn test_other_keys_are_ignored() {
    let mut state = PickerState::new(options(&["mp3", "wav"])).unwrap();
    state.move_down();

    for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Left, KeyCode::Char('c')] {
        assert_eq!(state.handle_key(key(code)), PickerAction::Stay);
    }
    assert_eq!(state.selected(), 1);
}

#[test]
fn test_ctrl_c_cancels() {
    let mut state = PickerState::new(options(&["mp3"])).unwrap();

    let action = state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(action, PickerAction::Cancel);
}

#[test]
fn test_single_option_never_moves() {
    let mut state = PickerState::new(options(&["mp3"])).unwrap();
    state.move_up();
    state.move_down();
    assert_eq!(state.selected(), 0);
}

#[test]
fn test_cancel_exit_code_is_interrupt_status() {
    assert_eq!(CANCELLED_EXIT_CODE, 130);
}
