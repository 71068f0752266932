pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use application::conversation;
pub use cli::Cli;
pub use config::{ConfigError, GenerationSettings, Secrets};
pub use domain::types;
pub use infrastructure::model;

use infrastructure::model::GeminiClient;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting konsultasi");

    // Startup configuration errors are fatal: report once and halt before
    // the chat surface is usable.
    let secrets = match Secrets::load(cli.secrets.as_deref().map(Path::new)) {
        Ok(secrets) => secrets,
        Err(err) => {
            eprintln!("{}", err.user_message());
            return Err(err.into());
        }
    };

    let settings = GenerationSettings::baked();
    if let Err(err) = settings.validate() {
        eprintln!("{}", err.user_message());
        return Err(err.into());
    }

    let model = settings.model.clone();
    let client = match GeminiClient::new(settings, secrets.api_key) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            eprintln!("{}", err.user_message());
            return Err(err.into());
        }
    };

    info!(model = model.as_str(), "Launching chat interface");
    tui::chat::run_chat(client, &model).await?;

    info!("Chat session finished");
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        // Quiet by default so log lines never tear the chat surface; opt in
        // through RUST_LOG.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
