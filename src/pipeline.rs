//! Per-message reply pipeline: load session, dispatch, save, translate.
//!
//! Every failure along the way ends up as reply text; nothing propagates to
//! the transport.

use crate::dispatch::{Dispatcher, Handled};
use crate::replies;
use chuck_core::{
    message::IncomingMessage,
    session::Session,
    traits::{SessionStore, Translator},
    LanguageCode,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared reply machinery, independent of any channel.
pub struct Pipeline {
    sessions: Arc<dyn SessionStore>,
    translator: Arc<dyn Translator>,
    dispatcher: Dispatcher,
}

impl Pipeline {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        translator: Arc<dyn Translator>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            sessions,
            translator,
            dispatcher,
        }
    }

    /// Produce the final, translated reply for one message.
    pub async fn respond(&self, incoming: &IncomingMessage) -> String {
        let session = match self.sessions.load(&incoming.sender_id).await {
            Ok(s) => s,
            Err(e) => {
                warn!("session load failed for {}: {e}", incoming.sender_id);
                Session::new(&incoming.sender_id)
            }
        };

        let Handled {
            intent,
            session,
            session_changed,
            reply,
        } = self.dispatcher.handle(incoming, session);
        debug!(
            "{}:{} -> {intent:?} (lang {})",
            incoming.channel, incoming.sender_id, session.language
        );

        if session_changed {
            if let Err(e) = self.sessions.save(&session).await {
                warn!("session save failed for {}: {e}", session.user_id);
            }
        }

        self.translate_or_fallback(&reply, session.language).await
    }

    /// Translate `text`, or fall back to the untranslated processing-error text.
    pub async fn translate_or_fallback(&self, text: &str, target: LanguageCode) -> String {
        match self.translator.translate(text, target).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(
                    "{} translation to {target} failed: {e}",
                    self.translator.name()
                );
                replies::PROCESSING_ERROR.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chuck_core::error::ChuckError;
    use chuck_jokes::JokeCatalog;
    use chuck_memory::MemorySessions;
    use std::sync::Mutex;

    /// Tags text with the target code and records every call.
    #[derive(Default)]
    struct TagTranslator {
        calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl Translator for TagTranslator {
        fn name(&self) -> &str {
            "tag"
        }

        async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, ChuckError> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), target.as_str().to_string()));
            if target.as_str() == "en" {
                Ok(text.to_string())
            } else {
                Ok(format!("[{target}] {text}"))
            }
        }
    }

    struct DownTranslator;

    #[async_trait]
    impl Translator for DownTranslator {
        fn name(&self) -> &str {
            "down"
        }

        async fn translate(&self, _: &str, _: LanguageCode) -> Result<String, ChuckError> {
            Err(ChuckError::Translation("503 Service Unavailable".into()))
        }
    }

    /// Session store that always fails.
    struct BrokenStore;

    #[async_trait]
    impl SessionStore for BrokenStore {
        async fn load(&self, _: &str) -> Result<Session, ChuckError> {
            Err(ChuckError::Memory("disk full".into()))
        }

        async fn save(&self, _: &Session) -> Result<(), ChuckError> {
            Err(ChuckError::Memory("disk full".into()))
        }
    }

    fn loaded_catalog() -> Arc<JokeCatalog> {
        let jokes = (1..=101).map(|i| format!("joke {i}")).collect();
        Arc::new(JokeCatalog::from_jokes(jokes).unwrap())
    }

    fn pipeline(
        sessions: Arc<dyn SessionStore>,
        translator: Arc<dyn Translator>,
        catalog: Arc<JokeCatalog>,
    ) -> Pipeline {
        Pipeline::new(sessions, translator, Dispatcher::new(catalog))
    }

    fn msg(user: &str, text: &str) -> IncomingMessage {
        IncomingMessage::new("telegram", user, text)
    }

    #[tokio::test]
    async fn test_set_language_then_joke_is_translated() {
        let sessions = Arc::new(MemorySessions::new());
        let translator = Arc::new(TagTranslator::default());
        let p = pipeline(sessions.clone(), translator.clone(), loaded_catalog());

        let ack = p.respond(&msg("u1", "set language spanish")).await;
        assert_eq!(ack, "[es] No problem");
        assert_eq!(sessions.load("u1").await.unwrap().language.as_str(), "es");

        let joke = p.respond(&msg("u1", "42")).await;
        assert_eq!(joke, "[es] joke 42");

        let calls = translator.calls.lock().unwrap();
        assert_eq!(calls[1], ("joke 42".to_string(), "es".to_string()));
    }

    #[tokio::test]
    async fn test_start_replies_in_english() {
        let sessions = Arc::new(MemorySessions::new());
        let p = pipeline(
            sessions.clone(),
            Arc::new(TagTranslator::default()),
            loaded_catalog(),
        );
        p.respond(&msg("u1", "set language french")).await;
        let welcome = p.respond(&msg("u1", "/start")).await;
        assert_eq!(welcome, replies::welcome(101));
        assert_eq!(sessions.load("u1").await.unwrap().language.as_str(), "en");
    }

    #[tokio::test]
    async fn test_error_replies_are_translated_too() {
        let sessions = Arc::new(MemorySessions::new());
        let p = pipeline(
            sessions,
            Arc::new(TagTranslator::default()),
            loaded_catalog(),
        );
        p.respond(&msg("u1", "set language german")).await;
        assert_eq!(
            p.respond(&msg("u1", "hello there")).await,
            format!("[de] {}", replies::INVALID_REQUEST)
        );
        assert_eq!(
            p.respond(&msg("u1", "set language Klingon")).await,
            format!("[de] {}", replies::INVALID_LANGUAGE)
        );
        assert_eq!(
            p.respond(&msg("u1", "500")).await,
            format!("[de] {}", replies::invalid_number(101))
        );
    }

    #[tokio::test]
    async fn test_users_do_not_share_language() {
        let sessions = Arc::new(MemorySessions::new());
        let p = pipeline(
            sessions,
            Arc::new(TagTranslator::default()),
            loaded_catalog(),
        );
        p.respond(&msg("alice", "set language italian")).await;
        assert_eq!(p.respond(&msg("alice", "1")).await, "[it] joke 1");
        assert_eq!(p.respond(&msg("bob", "1")).await, "joke 1");
    }

    #[tokio::test]
    async fn test_translation_failure_uses_untranslated_fallback() {
        let p = pipeline(
            Arc::new(MemorySessions::new()),
            Arc::new(DownTranslator),
            loaded_catalog(),
        );
        assert_eq!(p.respond(&msg("u1", "7")).await, replies::PROCESSING_ERROR);
        assert_eq!(
            p.respond(&msg("u1", "/start")).await,
            replies::PROCESSING_ERROR
        );
    }

    #[tokio::test]
    async fn test_translation_failure_still_saves_language() {
        let sessions = Arc::new(MemorySessions::new());
        let p = pipeline(sessions.clone(), Arc::new(DownTranslator), loaded_catalog());
        let reply = p.respond(&msg("u1", "set language french")).await;
        assert_eq!(reply, replies::PROCESSING_ERROR);
        assert_eq!(sessions.load("u1").await.unwrap().language.as_str(), "fr");
    }

    #[tokio::test]
    async fn test_catalog_not_loaded_reply() {
        let p = pipeline(
            Arc::new(MemorySessions::new()),
            Arc::new(TagTranslator::default()),
            Arc::new(JokeCatalog::new()),
        );
        assert_eq!(p.respond(&msg("u1", "5")).await, replies::PROCESSING_ERROR);
    }

    #[tokio::test]
    async fn test_broken_store_degrades_to_default_session() {
        let translator = Arc::new(TagTranslator::default());
        let p = pipeline(Arc::new(BrokenStore), translator.clone(), loaded_catalog());
        assert_eq!(p.respond(&msg("u1", "3")).await, "joke 3");
        // The acknowledgement goes out in the new language even if it was not persisted.
        assert_eq!(
            p.respond(&msg("u1", "set language russian")).await,
            "[ru] No problem"
        );
    }
}
