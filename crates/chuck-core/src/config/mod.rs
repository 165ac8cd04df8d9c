mod channels;
mod defaults;

#[cfg(test)]
mod tests;

pub use channels::*;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::ChuckError;
use defaults::*;

/// Top-level chuckbot configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub translator: TranslatorConfig,
    #[serde(default)]
    pub jokes: JokesConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Also write logs to `{data_dir}/logs/chuckbot.log`.
    #[serde(default)]
    pub log_to_file: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            log_to_file: false,
        }
    }
}

/// Azure Translator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_translator_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_translator_region")]
    pub region: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_translator_timeout")]
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translator_endpoint(),
            api_key: String::new(),
            region: default_translator_region(),
            api_version: default_api_version(),
            timeout_secs: default_translator_timeout(),
        }
    }
}

/// Where and how the joke catalog is fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokesConfig {
    #[serde(default = "default_jokes_url")]
    pub url: String,
    /// CSS selector; every match is one joke.
    #[serde(default = "default_jokes_selector")]
    pub selector: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_referer")]
    pub referer: String,
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
    #[serde(default = "default_jokes_timeout")]
    pub timeout_secs: u64,
}

impl Default for JokesConfig {
    fn default() -> Self {
        Self {
            url: default_jokes_url(),
            selector: default_jokes_selector(),
            user_agent: default_user_agent(),
            referer: default_referer(),
            accept_language: default_accept_language(),
            timeout_secs: default_jokes_timeout(),
        }
    }
}

/// Session storage config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// `"sqlite"` or `"memory"`.
    #[serde(default = "default_memory_backend")]
    pub backend: String,
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            backend: default_memory_backend(),
            db_path: default_db_path(),
        }
    }
}

impl Config {
    /// Apply environment overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`. Empty values are ignored.
    ///
    /// - `BOT_TOKEN` sets (and enables) the Telegram channel.
    /// - `TRANSLATOR_KEY` / `TRANSLATOR_API_ENDPOINT` set the translator.
    /// - `JOKE_SERVICE_URL` sets the joke page URL.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = get("BOT_TOKEN") {
            let tg = self.channel.telegram.get_or_insert_with(TelegramConfig::default);
            tg.bot_token = token;
            tg.enabled = true;
        }
        if let Some(key) = get("TRANSLATOR_KEY") {
            self.translator.api_key = key;
        }
        if let Some(endpoint) = get("TRANSLATOR_API_ENDPOINT") {
            self.translator.endpoint = endpoint;
        }
        if let Some(url) = get("JOKE_SERVICE_URL") {
            self.jokes.url = url;
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file, then apply environment overrides.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, ChuckError> {
    let mut config = read_file(path)?;
    config.apply_env();
    Ok(config)
}

/// Read a TOML config file without consulting the environment.
pub fn read_file(path: &str) -> Result<Config, ChuckError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ChuckError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| ChuckError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
