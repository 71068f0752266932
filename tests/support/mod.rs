//! Shared test doubles

use async_trait::async_trait;
use konsultasi::model::{ModelClient, ModelError};
use konsultasi::types::ChatTurn;
use std::sync::Mutex;
use std::time::Duration;

/// One scripted outcome for a single `generate` call
pub enum ScriptedReply {
    /// Succeed with the given text
    Text(String),
    /// Succeed with an empty string
    Empty,
    /// Fail with an invalid-response error
    Invalid,
    /// Never answer; only the caller's deadline can end the call
    Hang,
}

impl ScriptedReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }
}

/// Scripted model client. Replies are consumed in order; every call records
/// the turn snapshot it was given.
pub struct MockClient {
    script: Mutex<Vec<ScriptedReply>>,
    pub calls: Mutex<Vec<Vec<ChatTurn>>>,
}

impl MockClient {
    pub fn new(script: Vec<ScriptedReply>) -> Self {
        Self {
            script: Mutex::new(script),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(content: impl Into<String>) -> Self {
        Self::new(vec![ScriptedReply::text(content)])
    }
}

#[async_trait]
impl ModelClient for MockClient {
    async fn generate(&self, turns: Vec<ChatTurn>) -> Result<String, ModelError> {
        self.calls.lock().expect("calls lock").push(turns);
        let reply = self.script.lock().expect("script lock").remove(0);
        match reply {
            ScriptedReply::Text(content) => Ok(content),
            ScriptedReply::Empty => Ok(String::new()),
            ScriptedReply::Invalid => Err(ModelError::invalid_response("missing text")),
            ScriptedReply::Hang => {
                tokio::time::sleep(Duration::from_secs(86_400)).await;
                Ok("too late".to_string())
            }
        }
    }
}
