//! Key handling tests

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use konsultasi::tui::chat::{ChatState, InputAction, handle_input};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[test]
fn typing_updates_the_buffer() {
    let mut state = ChatState::new();

    let action = handle_input(&mut state, key(KeyCode::Char('h')));
    assert_eq!(action, InputAction::None);
    assert_eq!(state.input, "h");
}

#[test]
fn enter_with_empty_input_does_nothing() {
    let mut state = ChatState::new();
    let action = handle_input(&mut state, key(KeyCode::Enter));
    assert_eq!(action, InputAction::None);
}

#[test]
fn enter_with_blank_input_does_nothing() {
    let mut state = ChatState::new();
    state.input = "   ".to_string();
    let action = handle_input(&mut state, key(KeyCode::Enter));
    assert_eq!(action, InputAction::None);
}

#[test]
fn enter_with_text_submits() {
    let mut state = ChatState::new();
    state.input = "Saya sakit kepala".to_string();

    let action = handle_input(&mut state, key(KeyCode::Enter));
    assert_eq!(action, InputAction::Submit);
    // The buffer is handed over by take_input in the runner, not here
    assert_eq!(state.input, "Saya sakit kepala");
}

#[test]
fn enter_with_slash_input_becomes_a_command() {
    let mut state = ChatState::new();
    state.input = "/reset".to_string();
    state.cursor_pos = 6;

    let action = handle_input(&mut state, key(KeyCode::Enter));
    assert_eq!(action, InputAction::Command("/reset".to_string()));
    assert!(state.input.is_empty());
}

#[test]
fn q_with_empty_input_exits() {
    let mut state = ChatState::new();
    let action = handle_input(&mut state, key(KeyCode::Char('q')));
    assert_eq!(action, InputAction::Exit);
}

#[test]
fn q_inside_text_is_just_a_character() {
    let mut state = ChatState::new();
    state.input = "ha".to_string();
    state.cursor_pos = 2;

    let action = handle_input(&mut state, key(KeyCode::Char('q')));
    assert_eq!(action, InputAction::None);
    assert_eq!(state.input, "haq");
}

#[test]
fn ctrl_q_always_exits() {
    let mut state = ChatState::new();
    state.input = "text".to_string();
    let action = handle_input(&mut state, ctrl('q'));
    assert_eq!(action, InputAction::Exit);
}

#[test]
fn ctrl_c_clears_the_buffer() {
    let mut state = ChatState::new();
    state.input = "text".to_string();
    state.cursor_pos = 4;

    let action = handle_input(&mut state, ctrl('c'));
    assert_eq!(action, InputAction::None);
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn esc_clears_the_buffer() {
    let mut state = ChatState::new();
    state.input = "text".to_string();
    state.cursor_pos = 4;

    handle_input(&mut state, key(KeyCode::Esc));
    assert!(state.input.is_empty());
}

#[test]
fn input_is_ignored_while_loading() {
    let mut state = ChatState::new();
    state.loading = true;
    state.input = "tersimpan".to_string();

    let action = handle_input(&mut state, key(KeyCode::Char('x')));
    assert_eq!(action, InputAction::None);
    assert_eq!(state.input, "tersimpan");

    let action = handle_input(&mut state, key(KeyCode::Enter));
    assert_eq!(action, InputAction::None);
}

#[test]
fn exit_still_works_while_loading() {
    let mut state = ChatState::new();
    state.loading = true;

    let action = handle_input(&mut state, ctrl('q'));
    assert_eq!(action, InputAction::Exit);
}

#[test]
fn page_keys_scroll() {
    let mut state = ChatState::new();
    assert_eq!(
        handle_input(&mut state, key(KeyCode::PageUp)),
        InputAction::ScrollUp
    );
    assert_eq!(
        handle_input(&mut state, key(KeyCode::PageDown)),
        InputAction::ScrollDown
    );
    assert_eq!(handle_input(&mut state, ctrl('u')), InputAction::ScrollTop);
    assert_eq!(
        handle_input(&mut state, ctrl('d')),
        InputAction::ScrollBottom
    );
}
