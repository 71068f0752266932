//! Chat runner - main event loop coordinator

use super::input::{CommandResult, InputAction, handle_input, parse_command};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::application::conversation::{Conversation, request_reply};
use crate::infrastructure::model::{ModelClient, ModelError};
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const HELP_NOTICE: &str =
    "Perintah: /reset — mulai percakapan baru, /help — bantuan, /exit — keluar";

/// Run the TUI chat interface until the user exits
pub async fn run_chat<C>(client: Arc<C>, model: &str) -> Result<(), Box<dyn Error>>
where
    C: ModelClient + 'static,
{
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new();
    let mut conversation = Conversation::new();

    let result = run_chat_loop(&mut terminal, &mut state, &mut conversation, client, model).await;

    restore_terminal()?;
    result
}

/// Internal chat loop. The conversation is owned here and mutated only on
/// this path: submits are serialized by the `loading` flag, so the
/// compensating delete inside `resolve` never races.
async fn run_chat_loop<C>(
    terminal: &mut Tui,
    state: &mut ChatState,
    conversation: &mut Conversation,
    client: Arc<C>,
    model: &str,
) -> Result<(), Box<dyn Error>>
where
    C: ModelClient + 'static,
{
    let (response_tx, mut response_rx) = mpsc::channel::<Result<String, ModelError>>(1);

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, state, conversation, model);
        })?;

        while let Ok(outcome) = response_rx.try_recv() {
            state.loading = false;
            match conversation.resolve(outcome) {
                Ok(_) => state.scroll_to_bottom(),
                Err(err) => state.error_message = Some(err.user_message()),
            }
        }

        let timeout = if state.loading {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let action = handle_input(state, event::read()?);

            match action {
                InputAction::Exit => {
                    return Ok(());
                }

                InputAction::Submit => {
                    let input = state.take_input();
                    if !input.trim().is_empty() {
                        state.error_message = None;
                        state.status_message = None;
                        state.loading = true;

                        let turns = conversation.begin(input);
                        let client = client.clone();
                        let tx = response_tx.clone();
                        tokio::spawn(async move {
                            let outcome = request_reply(client.as_ref(), turns).await;
                            let _ = tx.send(outcome).await;
                        });

                        state.scroll_to_bottom();
                    }
                }

                InputAction::Command(cmd) => {
                    if handle_command(state, conversation, &cmd) {
                        return Ok(());
                    }
                }

                InputAction::ScrollUp => state.scroll_up(),
                // Render clamps to the real content height
                InputAction::ScrollDown => state.scroll_down(1000),
                InputAction::ScrollTop => state.scroll_offset = 0,
                InputAction::ScrollBottom => state.scroll_to_bottom(),
                InputAction::None => {}
            }
        } else if state.loading {
            state.tick_loading();
        }
    }
}

/// Handle command execution; returns true when the chat should exit
fn handle_command(state: &mut ChatState, conversation: &mut Conversation, input: &str) -> bool {
    match parse_command(input) {
        CommandResult::None => {}

        CommandResult::ShowHelp => {
            state.status_message = Some(HELP_NOTICE.to_string());
        }

        CommandResult::Reset => {
            conversation.reset();
            state.error_message = None;
            state.scroll_offset = 0;
            state.status_message = Some("Percakapan baru dimulai.".to_string());
        }

        CommandResult::Exit => return true,

        CommandResult::Unknown(cmd) => {
            state.status_message = Some(format!(
                "Perintah tidak dikenal: /{cmd}. Ketik /help untuk daftar perintah."
            ));
        }
    }
    false
}
