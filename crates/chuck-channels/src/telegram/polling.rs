//! Long-polling update loop and Channel trait implementation.

use super::types::{TgMessage, TgResponse, TgUpdate};
use super::TelegramChannel;
use async_trait::async_trait;
use chuck_core::{
    error::ChuckError,
    message::{IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, ChuckError> {
        self.register_commands().await;

        let (tx, rx) = mpsc::channel(64);
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let allowed_users = self.config.allowed_users.clone();
        let last_update_id = self.last_update_id.clone();

        info!("Telegram channel starting long polling...");

        tokio::spawn(async move {
            let mut backoff_secs: u64 = 1;

            loop {
                let offset = last_update_id.lock().await.map(|id| id + 1);

                let mut url = format!("{base_url}/getUpdates?timeout=30");
                if let Some(off) = offset {
                    url.push_str(&format!("&offset={off}"));
                }

                let resp = match client
                    .get(&url)
                    .timeout(Duration::from_secs(35))
                    .send()
                    .await
                {
                    Ok(r) => r,
                    Err(e) => {
                        error!("telegram poll error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(60);
                        continue;
                    }
                };

                let body: TgResponse<Vec<TgUpdate>> = match resp.json().await {
                    Ok(b) => b,
                    Err(e) => {
                        error!("telegram parse error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(60);
                        continue;
                    }
                };

                if !body.ok {
                    error!(
                        "telegram API error (retry in {backoff_secs}s): {}",
                        body.description.unwrap_or_default()
                    );
                    tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
                    backoff_secs = (backoff_secs * 2).min(60);
                    continue;
                }

                // Successful poll -- reset backoff.
                backoff_secs = 1;

                let updates = body.result.unwrap_or_default();

                if let Some(last_update) = updates.last() {
                    *last_update_id.lock().await = Some(last_update.update_id);
                }

                for update in updates {
                    let Some(msg) = update.message else {
                        continue;
                    };
                    let Some(incoming) = to_incoming(msg, &allowed_users) else {
                        continue;
                    };

                    if tx.send(incoming).await.is_err() {
                        info!("telegram channel receiver dropped, stopping poll");
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), ChuckError> {
        let chat_id_str = message
            .reply_target
            .as_deref()
            .ok_or_else(|| ChuckError::Channel("no reply_target on outgoing message".into()))?;

        let chat_id: i64 = chat_id_str.parse().map_err(|e| {
            ChuckError::Channel(format!("invalid telegram chat_id '{chat_id_str}': {e}"))
        })?;

        self.send_text(chat_id, &message.text).await
    }

    async fn stop(&self) -> Result<(), ChuckError> {
        info!("Telegram channel stopped");
        Ok(())
    }
}

/// Turn a Telegram message into an [`IncomingMessage`].
///
/// Returns `None` for non-text messages, messages without a sender, and
/// senders outside a non-empty `allowed_users` list.
pub(crate) fn to_incoming(msg: TgMessage, allowed_users: &[i64]) -> Option<IncomingMessage> {
    let Some(text) = msg.text else {
        debug!("telegram: skipping non-text message in chat {}", msg.chat.id);
        return None;
    };
    let user = msg.from?;

    if !allowed_users.is_empty() && !allowed_users.contains(&user.id) {
        warn!("ignoring message from unauthorized user {}", user.id);
        return None;
    }

    debug!("telegram: message from {} in chat {}", user.display_name(), msg.chat.id);

    Some(IncomingMessage {
        channel: "telegram".to_string(),
        sender_id: user.id.to_string(),
        text,
        reply_target: Some(msg.chat.id.to_string()),
    })
}
