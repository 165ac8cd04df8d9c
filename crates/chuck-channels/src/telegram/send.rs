//! Message sending and command registration.

use super::{TelegramChannel, MAX_MESSAGE_LEN};
use crate::utils::split_message;
use chuck_core::error::ChuckError;
use tracing::{info, warn};

impl TelegramChannel {
    /// Send a plain text message to a specific chat.
    pub(crate) async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), ChuckError> {
        for chunk in split_message(text, MAX_MESSAGE_LEN) {
            let url = format!("{}/sendMessage", self.base_url);
            let body = serde_json::json!({
                "chat_id": chat_id,
                "text": chunk,
            });

            let resp = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| ChuckError::Channel(format!("telegram send failed: {e}")))?;

            let status = resp.status();
            if !status.is_success() {
                let error_text = resp.text().await.unwrap_or_default();
                return Err(ChuckError::Channel(format!(
                    "telegram send failed ({status}): {error_text}"
                )));
            }
        }

        Ok(())
    }

    /// Register bot commands with Telegram so users see an autocomplete menu.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn register_commands(&self) {
        let commands = serde_json::json!({
            "commands": [
                { "command": "start", "description": "Welcome message, resets language to English" },
            ]
        });

        let url = format!("{}/setMyCommands", self.base_url);
        match self.client.post(&url).json(&commands).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("registered Telegram bot commands");
            }
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                warn!("failed to register Telegram bot commands: {body}");
            }
            Err(e) => {
                warn!("failed to register Telegram bot commands: {e}");
            }
        }
    }
}
