pub mod chat;
pub mod terminal;
