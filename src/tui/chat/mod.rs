//! TUI chat interface
//!
//! - state.rs: presentation state (input buffer, scrolling, banners)
//! - ui.rs: rendering
//! - input.rs: key and command handling
//! - runner.rs: coordinates the components around the conversation

mod input;
mod runner;
mod state;
mod ui;

pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use runner::run_chat;
pub use state::ChatState;
