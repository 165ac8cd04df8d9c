//! In-process session store. Sessions live as long as the process.

use async_trait::async_trait;
use chuck_core::{error::ChuckError, session::Session, traits::SessionStore};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Session store backed by a map.
#[derive(Default)]
pub struct MemorySessions {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a saved session.
    #[cfg(test)]
    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessions {
    async fn load(&self, user_id: &str) -> Result<Session, ChuckError> {
        Ok(self
            .sessions
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| Session::new(user_id)))
    }

    async fn save(&self, session: &Session) -> Result<(), ChuckError> {
        self.sessions
            .write()
            .await
            .insert(session.user_id.clone(), session.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chuck_core::LanguageCode;

    #[tokio::test]
    async fn test_load_unknown_user_is_default_and_not_saved() {
        let store = MemorySessions::new();
        let s = store.load("u1").await.unwrap();
        assert_eq!(s, Session::new("u1"));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_save_then_load_per_user() {
        let store = MemorySessions::new();
        let es = LanguageCode::from_code("es").unwrap();
        store
            .save(&Session::new("u1").with_language(es))
            .await
            .unwrap();

        assert_eq!(store.load("u1").await.unwrap().language, es);
        assert_eq!(store.load("u2").await.unwrap().language.as_str(), "en");
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = MemorySessions::new();
        let es = LanguageCode::from_code("es").unwrap();
        let fr = LanguageCode::from_code("fr").unwrap();
        store.save(&Session::new("u1").with_language(es)).await.unwrap();
        store.save(&Session::new("u1").with_language(fr)).await.unwrap();
        assert_eq!(store.load("u1").await.unwrap().language, fr);
        assert_eq!(store.len().await, 1);
    }
}
