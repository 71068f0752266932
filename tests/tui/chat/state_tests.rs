//! ChatState tests

use konsultasi::tui::chat::ChatState;

#[test]
fn test_chat_state_new() {
    let state = ChatState::new();

    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert_eq!(state.scroll_offset, 0);
    assert!(!state.loading);
    assert!(state.error_message.is_none());
    assert!(state.status_message.is_none());
}

#[test]
fn test_insert_and_take_input() {
    let mut state = ChatState::new();
    for c in "halo".chars() {
        state.insert_char(c);
    }
    assert_eq!(state.input, "halo");
    assert_eq!(state.cursor_pos, 4);

    let taken = state.take_input();
    assert_eq!(taken, "halo");
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_insert_mid_input() {
    let mut state = ChatState::new();
    for c in "hlo".chars() {
        state.insert_char(c);
    }
    state.move_cursor_home();
    state.move_cursor_right();
    state.insert_char('a');

    assert_eq!(state.input, "halo");
    assert_eq!(state.cursor_pos, 2);
}

#[test]
fn test_backspace_and_delete() {
    let mut state = ChatState::new();
    for c in "abc".chars() {
        state.insert_char(c);
    }

    state.delete_char();
    assert_eq!(state.input, "ab");

    state.move_cursor_home();
    state.delete_char_forward();
    assert_eq!(state.input, "b");

    // Backspace at the start is a no-op
    state.delete_char();
    assert_eq!(state.input, "b");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_multibyte_input_editing() {
    let mut state = ChatState::new();
    for c in "sakit é".chars() {
        state.insert_char(c);
    }
    assert_eq!(state.cursor_pos, 7);

    state.delete_char();
    assert_eq!(state.input, "sakit ");
}

#[test]
fn test_cursor_bounds() {
    let mut state = ChatState::new();
    state.insert_char('x');

    state.move_cursor_right();
    state.move_cursor_right();
    assert_eq!(state.cursor_pos, 1);

    state.move_cursor_left();
    state.move_cursor_left();
    assert_eq!(state.cursor_pos, 0);

    state.move_cursor_end();
    assert_eq!(state.cursor_pos, 1);
}

#[test]
fn test_scrolling() {
    let mut state = ChatState::new();

    state.scroll_up();
    assert_eq!(state.scroll_offset, 0);

    state.scroll_down(5);
    state.scroll_down(5);
    assert_eq!(state.scroll_offset, 2);

    state.scroll_to_bottom();
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_loading_tick() {
    let mut state = ChatState::new();
    state.loading = true;
    state.loading_frame = 0;

    state.tick_loading();
    assert_eq!(state.loading_frame, 1);

    state.loading_frame = 3;
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);
}

#[test]
fn test_is_command() {
    let mut state = ChatState::new();
    assert!(!state.is_command());

    state.input = "/reset".to_string();
    assert!(state.is_command());

    state.input = ":help".to_string();
    assert!(state.is_command());

    state.input = "sakit kepala".to_string();
    assert!(!state.is_command());
}
