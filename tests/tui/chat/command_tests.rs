//! Slash command parsing tests

use konsultasi::tui::chat::{CommandResult, parse_command};

#[test]
fn parses_reset_and_aliases() {
    assert_eq!(parse_command("/reset"), CommandResult::Reset);
    assert_eq!(parse_command("/clear"), CommandResult::Reset);
    assert_eq!(parse_command("/new"), CommandResult::Reset);
    assert_eq!(parse_command(":reset"), CommandResult::Reset);
}

#[test]
fn parses_help() {
    assert_eq!(parse_command("/help"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/?"), CommandResult::ShowHelp);
}

#[test]
fn parses_exit() {
    assert_eq!(parse_command("/exit"), CommandResult::Exit);
    assert_eq!(parse_command("/quit"), CommandResult::Exit);
}

#[test]
fn command_names_are_case_insensitive() {
    assert_eq!(parse_command("/RESET"), CommandResult::Reset);
    assert_eq!(parse_command("/Help"), CommandResult::ShowHelp);
}

#[test]
fn trailing_arguments_are_ignored() {
    assert_eq!(parse_command("/reset sekarang"), CommandResult::Reset);
}

#[test]
fn unknown_command_is_reported_by_name() {
    assert_eq!(
        parse_command("/branch"),
        CommandResult::Unknown("branch".to_string())
    );
}

#[test]
fn bare_slash_is_no_command() {
    assert_eq!(parse_command("/"), CommandResult::None);
}
