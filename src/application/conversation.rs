//! Conversation state management
//!
//! One state object owns the ordered turn history and mediates every
//! mutation. A user turn and its paired model turn are appended together, as
//! seen by the rendered history, or not at all: the user turn is appended
//! speculatively before the remote call, and a failed call removes it again.
//! There is no transaction underneath; the guarantee rests on the
//! compensating delete plus the serialized request path (the chat surface
//! refuses new input while a request is in flight).

use std::time::Duration;

use tokio::time;
use tracing::{debug, warn};

use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::domain::types::{ChatTurn, TurnRole, seed_conversation};
use crate::infrastructure::model::{ModelClient, ModelError};

/// Ordered chat history for one session, seeded with the fixed two-turn
/// persona pair. Created at session start, dropped at session end; nothing is
/// persisted.
#[derive(Debug)]
pub struct Conversation {
    history: Vec<ChatTurn>,
    awaiting_reply: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            history: seed_conversation(),
            awaiting_reply: false,
        }
    }

    /// Turns in chronological order.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// True between `begin` and `resolve`, while the newest user turn still
    /// has no paired reply.
    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Phase one of a submit cycle: append the user turn immediately and
    /// unconditionally, and hand back the history snapshot to send to the
    /// model. The request path is serialized, so at most one turn is ever
    /// pending.
    pub fn begin(&mut self, user_text: impl Into<String>) -> Vec<ChatTurn> {
        debug_assert!(!self.awaiting_reply, "submit while a request is in flight");
        self.history.push(ChatTurn::user(user_text));
        self.awaiting_reply = true;
        self.history.clone()
    }

    /// Phase two: pair the pending user turn with the reply, or roll it back.
    /// A blank reply counts as a failure; the original message must be
    /// resubmitted manually.
    pub fn resolve(&mut self, outcome: Result<String, ModelError>) -> Result<(), ModelError> {
        match outcome {
            Ok(text) if !text.trim().is_empty() => {
                self.awaiting_reply = false;
                self.history.push(ChatTurn::model(text));
                debug!(turns = self.history.len(), "Reply appended to history");
                Ok(())
            }
            Ok(_) => {
                self.discard_pending();
                Err(ModelError::EmptyReply)
            }
            Err(err) => {
                self.discard_pending();
                Err(err)
            }
        }
    }

    /// Full submit cycle against a model client, bounded by the 60-second
    /// deadline. Net effect on the history is exactly +2 turns or 0.
    pub async fn submit<C>(
        &mut self,
        client: &C,
        user_text: impl Into<String>,
    ) -> Result<(), ModelError>
    where
        C: ModelClient + ?Sized,
    {
        let turns = self.begin(user_text);
        let outcome = request_reply(client, turns).await;
        self.resolve(outcome)
    }

    /// Replace the history with a fresh copy of the seed pair. Idempotent.
    pub fn reset(&mut self) {
        self.history = seed_conversation();
        self.awaiting_reply = false;
    }

    /// Compensating delete for the speculatively appended user turn. If no
    /// pending user turn is at the tail (not reachable given the seed
    /// invariant and the serialized request path), this is a no-op beyond
    /// clearing the pending flag.
    fn discard_pending(&mut self) {
        if !self.awaiting_reply {
            return;
        }
        self.awaiting_reply = false;
        if self
            .history
            .last()
            .is_some_and(|turn| turn.role == TurnRole::User)
        {
            self.history.pop();
            warn!(turns = self.history.len(), "Rolled back unanswered user turn");
        }
    }
}

/// One model round trip under the caller-imposed deadline. No retry: a single
/// failed attempt is final for that submit cycle.
pub async fn request_reply<C>(client: &C, turns: Vec<ChatTurn>) -> Result<String, ModelError>
where
    C: ModelClient + ?Sized,
{
    match time::timeout(
        Duration::from_secs(REQUEST_TIMEOUT_SECS),
        client.generate(turns),
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(_) => Err(ModelError::Timeout(REQUEST_TIMEOUT_SECS)),
    }
}
