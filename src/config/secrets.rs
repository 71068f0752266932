use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;

use dotenvy::from_filename;
use serde::Deserialize;
use tracing::debug;

use super::error::ConfigError;
use crate::constants::{API_KEY_VAR, ENV_PATH, SECRETS_PATH};

static ENV_LOADER: Once = Once::new();

/// Raw secrets structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawSecrets {
    #[serde(rename = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,
}

/// The one secret the program needs: the Gemini API credential.
#[derive(Debug, Clone)]
pub struct Secrets {
    pub api_key: String,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

impl Secrets {
    /// Load the API credential from the secrets file, falling back to the
    /// process environment. Absence anywhere is fatal: the caller halts
    /// before the chat surface is usable.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        ensure_env_loaded();
        let secrets_path = path.unwrap_or_else(|| Path::new(SECRETS_PATH));

        if let Some(key) = read_secrets_file(secrets_path)? {
            return Ok(Self { api_key: key });
        }

        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self { api_key: key }),
            _ => Err(ConfigError::MissingApiKey),
        }
    }
}

fn read_secrets_file(path: &Path) -> Result<Option<String>, ConfigError> {
    debug!(path = %path.display(), "Reading secrets file");

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        // A missing file is not an error; the environment may still hold the key.
        Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let parsed: RawSecrets = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parsed
        .gemini_api_key
        .filter(|key| !key.trim().is_empty()))
}
