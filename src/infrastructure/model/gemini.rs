//! Gemini client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::traits::ModelClient;
use super::types::ModelError;
use crate::config::GenerationSettings;
use crate::constants::{GEMINI_API_PATH, GEMINI_ENDPOINT, REQUEST_TIMEOUT_SECS};
use crate::domain::types::ChatTurn;

/// Gemini client for Google AI
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    api_path: String,
    api_key: String,
    settings: GenerationSettings,
}

impl GeminiClient {
    pub fn new(settings: GenerationSettings, api_key: String) -> Result<Self, ModelError> {
        if api_key.trim().is_empty() {
            return Err(ModelError::MissingApiKey);
        }
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ModelError::network)?;
        Ok(Self {
            http,
            endpoint: GEMINI_ENDPOINT.to_string(),
            api_path: GEMINI_API_PATH.to_string(),
            api_key,
            settings,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build_model_url(&self) -> String {
        let base = self.endpoint.trim_end_matches('/');
        format!("{base}/{}/{}:generateContent", self.api_path, self.settings.model)
    }

    fn build_payload(&self, turns: &[ChatTurn]) -> Value {
        json!({
            "contents": to_gemini_contents(turns),
            "generationConfig": {
                "temperature": self.settings.temperature,
                "maxOutputTokens": self.settings.max_output_tokens,
            }
        })
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, turns: Vec<ChatTurn>) -> Result<String, ModelError> {
        let url = self.build_model_url();
        let payload = self.build_payload(&turns);

        info!(
            model = self.settings.model.as_str(),
            turns = turns.len(),
            "Sending request to Gemini"
        );

        let url_with_key = format!("{url}?key={}", self.api_key);
        let response: GeminiResponse = self
            .http
            .post(&url_with_key)
            .json(&payload)
            .send()
            .await
            .map_err(ModelError::network)?
            .error_for_status()
            .map_err(ModelError::network)?
            .json()
            .await
            .map_err(ModelError::network)?;
        debug!("Received response from Gemini");

        response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .flat_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
            .ok_or_else(|| ModelError::invalid_response("missing text"))
    }
}

/// Map turns to the Gemini `contents` array. Roles pass through untouched
/// because [`TurnRole`](crate::domain::types::TurnRole) already carries the
/// wire names.
fn to_gemini_contents(turns: &[ChatTurn]) -> Vec<Value> {
    turns
        .iter()
        .map(|turn| {
            json!({
                "role": turn.role.as_str(),
                "parts": [{"text": turn.text.clone()}]
            })
        })
        .collect()
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
