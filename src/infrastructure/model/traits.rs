//! Model traits

use super::types::ModelError;
use crate::domain::types::ChatTurn;
use async_trait::async_trait;

/// Seam between the conversation manager and a concrete model backend.
/// Takes the full ordered history, newest user turn last, and returns the
/// generated reply text.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, turns: Vec<ChatTurn>) -> Result<String, ModelError>;
}
