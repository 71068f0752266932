//! Application constants
//!
//! Single source of truth for paths and the fixed model selection.

/// Default secrets file path
pub const SECRETS_PATH: &str = "config/secrets.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable holding the API credential
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Gemini API endpoint
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Gemini API path
pub const GEMINI_API_PATH: &str = "v1beta/models";

/// Fixed model identifier
pub const MODEL_NAME: &str = "gemini-1.5-flash";

/// Fixed sampling temperature
pub const TEMPERATURE: f32 = 0.4;

/// Fixed output length ceiling in tokens
pub const MAX_OUTPUT_TOKENS: u32 = 500;

/// Ceiling on a single model round trip, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 60;
