use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub telegram_bot_token: String,

    /// Port the health-check endpoint listens on
    pub port: u16,

    /// Path of the single-instance lock file
    pub lock_file: PathBuf,

    /// Longest name (in chars) accepted by /style. The hard byte cap
    /// on callback payloads is enforced separately by the keyboard.
    pub max_name_chars: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            telegram_bot_token: std::env::var("TELEGRAM_BOT_TOKEN")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            lock_file: std::env::var("LOCK_FILE")
                .unwrap_or_else(|_| "/tmp/stylish_name_bot.lock".to_string())
                .into(),
            max_name_chars: std::env::var("MAX_NAME_CHARS")
                .unwrap_or_else(|_| "32".to_string())
                .parse()
                .unwrap_or(32),
        })
    }
}
