mod args;
mod tui;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skywalker_core::config::AppConfig;
use skywalker_core::gateway::AiGateway;
use skywalker_core::gemini::GeminiClient;
use skywalker_core::store::PreferenceStore;

use args::Args;
use tui::App;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never corrupt the terminal UI; RUST_LOG
    // overrides the -v count
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match args.config {
        Some(ref path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::load_default(),
    };
    config.expand_env_vars();

    if config.provider.api_key.is_none() {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            config.provider.api_key = Some(key);
        }
    }
    if let Some(data_dir) = args.data_dir.clone() {
        config.storage.data_dir = data_dir;
    }
    if let Some(language) = args.parse_language() {
        config.default_language = language;
    }

    let client = GeminiClient::new(&config.provider)
        .context("set provider.api_key in skywalker.toml or export GEMINI_API_KEY")?;
    let gateway = AiGateway::new(Arc::new(client));

    let store = PreferenceStore::open(config.db_path())
        .with_context(|| format!("failed to open {}", config.db_path().display()))?;

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(&config, store, gateway, runtime.handle().clone());
    tui::runner::run(&mut app)?;

    Ok(())
}
