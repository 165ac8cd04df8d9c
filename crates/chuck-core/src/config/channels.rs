use serde::{Deserialize, Serialize};

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    pub telegram: Option<TelegramConfig>,
}

/// Telegram bot config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TelegramConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub bot_token: String,
    /// Telegram user ids allowed to talk to the bot. Empty = allow all.
    #[serde(default)]
    pub allowed_users: Vec<i64>,
}
