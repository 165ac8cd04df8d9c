use crate::{
    error::ChuckError,
    language::LanguageCode,
    message::{IncomingMessage, OutgoingMessage},
    session::Session,
};
use async_trait::async_trait;

/// Messaging channel: receives user text and sends replies back.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, ChuckError>;

    /// Send a reply back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), ChuckError>;

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), ChuckError>;
}

/// Text translation backend.
///
/// Every call is fallible; callers degrade to an untranslated fallback.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Translate `text` into `target`.
    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, ChuckError>;
}

/// Per-user session storage, keyed by sender id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session for `user_id`, or a default one if none was saved.
    async fn load(&self, user_id: &str) -> Result<Session, ChuckError>;

    /// Persist `session` (last write wins).
    async fn save(&self, session: &Session) -> Result<(), ChuckError>;
}
