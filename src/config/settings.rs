use super::error::ConfigError;
use crate::constants::{MAX_OUTPUT_TOKENS, MODEL_NAME, TEMPERATURE};

/// Fixed model selection and generation parameters. These are static
/// configuration, not runtime-negotiable; `baked()` is the only production
/// constructor.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationSettings {
    pub fn baked() -> Self {
        Self {
            model: MODEL_NAME.to_string(),
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }

    /// Reject unusable parameters before the first request. A violation is a
    /// fatal startup condition, reported once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModelName);
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidTemperature {
                value: self.temperature,
            });
        }
        if self.max_output_tokens == 0 {
            return Err(ConfigError::InvalidMaxOutputTokens);
        }
        Ok(())
    }
}
