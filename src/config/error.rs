use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading secrets or validating model settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read secrets from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse secrets from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing API key - set GEMINI_API_KEY in config/secrets.toml or the environment")]
    MissingApiKey,

    #[error("model name must not be empty")]
    EmptyModelName,

    #[error("temperature {value} is outside the valid range [0, 1]")]
    InvalidTemperature { value: f32 },

    #[error("max_output_tokens must be greater than zero")]
    InvalidMaxOutputTokens,
}

impl ConfigError {
    /// User-friendly error message in Indonesian, shown once at startup
    /// before the program halts.
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::Io { path, .. } => {
                format!("Kesalahan membaca berkas rahasia {}.", path.display())
            }
            ConfigError::Parse { path, .. } => {
                format!("Berkas rahasia {} tidak valid.", path.display())
            }
            ConfigError::MissingApiKey => "Kesalahan konfigurasi API Key. Pastikan Anda telah \
                                           menambahkan GEMINI_API_KEY di config/secrets.toml \
                                           atau variabel lingkungan."
                .to_string(),
            ConfigError::EmptyModelName
            | ConfigError::InvalidTemperature { .. }
            | ConfigError::InvalidMaxOutputTokens => {
                format!("Kesalahan saat inisialisasi model: {self}")
            }
        }
    }
}
