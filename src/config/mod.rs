//! Startup configuration: the API credential and the fixed model selection.

mod error;
mod secrets;
mod settings;

pub use error::ConfigError;
pub use secrets::{Secrets, ensure_env_loaded};
pub use settings::GenerationSettings;
