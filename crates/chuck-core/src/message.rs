/// An incoming text message from a channel.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Channel name (e.g. "telegram").
    pub channel: String,
    /// Platform-specific user ID. Sessions are keyed by this.
    pub sender_id: String,
    pub text: String,
    /// Platform-specific target for routing the response (e.g. Telegram chat_id).
    pub reply_target: Option<String>,
}

impl IncomingMessage {
    pub fn new(channel: &str, sender_id: &str, text: &str) -> Self {
        Self {
            channel: channel.to_string(),
            sender_id: sender_id.to_string(),
            text: text.to_string(),
            reply_target: None,
        }
    }
}

/// An outgoing message to send back through a channel.
#[derive(Debug, Clone, Default)]
pub struct OutgoingMessage {
    pub text: String,
    pub reply_target: Option<String>,
}
