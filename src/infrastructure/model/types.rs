//! Model error types

use reqwest::StatusCode;
use thiserror::Error;

/// Failures from a single model round trip
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model client requires an API key")]
    MissingApiKey,
    #[error("model request exceeded the {0}s deadline")]
    Timeout(u64),
    #[error("network error calling Gemini: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("Gemini returned invalid response: {reason}")]
    InvalidResponse { reason: String },
    #[error("Gemini returned an empty reply")]
    EmptyReply,
}

impl ModelError {
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// User-friendly error message in Indonesian
    pub fn user_message(&self) -> String {
        match self {
            ModelError::MissingApiKey => {
                "Konfigurasi API Key tidak ditemukan. Pastikan GEMINI_API_KEY telah diatur."
                    .to_string()
            }
            ModelError::Timeout(secs) => {
                format!("Permintaan ke Gemini melebihi batas waktu {secs} detik.")
            }
            ModelError::Network { source } => {
                if source.is_connect() {
                    "Tidak dapat terhubung ke Gemini. Pastikan koneksi internet stabil.".to_string()
                } else if source.is_timeout() {
                    "Permintaan ke Gemini melebihi batas waktu.".to_string()
                } else if let Some(status) = source.status() {
                    match status {
                        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                            "Maaf, terjadi kesalahan saat berkomunikasi dengan Gemini. Pastikan \
                             API Key Anda benar."
                                .to_string()
                        }
                        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                            "Layanan Gemini sedang tidak tersedia. Silakan coba lagi.".to_string()
                        }
                        _ => format!(
                            "Maaf, terjadi kesalahan saat berkomunikasi dengan Gemini: {}",
                            status.as_u16()
                        ),
                    }
                } else {
                    "Maaf, terjadi kesalahan jaringan saat berkomunikasi dengan Gemini."
                        .to_string()
                }
            }
            ModelError::InvalidResponse { .. } | ModelError::EmptyReply => {
                "Maaf, saya tidak bisa memberikan balasan. Respons API kosong atau tidak valid."
                    .to_string()
            }
        }
    }
}
