//! Intent dispatcher: classifies one message, updates the session when the
//! intent calls for it, and produces the (untranslated) reply text.
//!
//! The session's language only changes on `/start` (reset to English) and on
//! a "set language" request whose name resolves. Joke requests and
//! unrecognized input never touch it.

mod intent;


pub use intent::{Intent, SET_LANGUAGE_TRIGGER, START_TOKEN};

use crate::replies;
use chuck_core::{language, message::IncomingMessage, session::Session, LanguageCode};
use chuck_jokes::JokeCatalog;
use std::sync::Arc;
use tracing::{debug, error};

/// Result of dispatching one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handled {
    pub intent: Intent,
    /// Session after this message; equal to the input unless `session_changed`.
    pub session: Session,
    pub session_changed: bool,
    /// Reply in the source language, not yet translated.
    pub reply: String,
}

/// Routes classified messages to their reply paths.
pub struct Dispatcher {
    catalog: Arc<JokeCatalog>,
}

impl Dispatcher {
    pub fn new(catalog: Arc<JokeCatalog>) -> Self {
        Self { catalog }
    }

    /// Handle one inbound message against the sender's current session.
    pub fn handle(&self, message: &IncomingMessage, session: Session) -> Handled {
        let intent = Intent::classify(&message.text);
        let (session, session_changed, reply) = match &intent {
            Intent::Start => (
                session.with_language(LanguageCode::default()),
                true,
                replies::welcome(self.catalog.size()),
            ),
            Intent::SetLanguage(candidate) => match language::resolve(candidate) {
                Some(code) => (
                    session.with_language(code),
                    true,
                    replies::LANGUAGE_SET.to_string(),
                ),
                None => {
                    debug!(
                        "user {}: unknown language name '{candidate}'",
                        message.sender_id
                    );
                    (session, false, replies::INVALID_LANGUAGE.to_string())
                }
            },
            Intent::JokeRequest(ordinal) => (session, false, self.joke_reply(*ordinal)),
            Intent::Unrecognized => (session, false, replies::INVALID_REQUEST.to_string()),
        };

        Handled {
            intent,
            session,
            session_changed,
            reply,
        }
    }

    /// Reply text for a joke number: the joke itself, or why there is none.
    fn joke_reply(&self, ordinal: i64) -> String {
        if !self.catalog.is_loaded() {
            error!("joke {ordinal} requested but the joke catalog is not loaded");
            return replies::PROCESSING_ERROR.to_string();
        }

        let size = self.catalog.size();
        let in_range = usize::try_from(ordinal).is_ok_and(|n| (1..=size).contains(&n));
        if !in_range {
            return replies::invalid_number(size);
        }

        match self.catalog.get(ordinal) {
            Ok(joke) => joke.to_string(),
            Err(e) => {
                error!("joke {ordinal} lookup failed: {e}");
                replies::PROCESSING_ERROR.to_string()
            }
        }
    }
}
