use std::sync::Arc;

use teloxide::prelude::*;
use tracing_subscriber::EnvFilter;

mod bot;
mod config;
mod lock;
mod style;
mod web;

use config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🎨 Starting Stylish Name Bot...");

    // Load config
    let config = AppConfig::from_env()?;

    // Only one instance may run; the lock file is removed when main
    // returns (ctrl-c stops the dispatcher, then the lock drops).
    let _instance_lock = lock::InstanceLock::acquire(&config.lock_file)?;
    tracing::info!("Instance lock acquired at {}", config.lock_file.display());

    // Health-check endpoint for hosting platforms
    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = web::serve(port).await {
            tracing::error!("Health endpoint failed: {e}");
        }
    });

    // Build shared application state
    let state = Arc::new(bot::AppState {
        config: config.clone(),
    });

    // Create the Telegram bot
    let bot = Bot::new(&config.telegram_bot_token);

    // Build the dispatcher
    let handler = bot::build_handler();

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("Dispatcher stopped, shutting down");
    Ok(())
}
