//! Session rows: one per user, upserted on save.

use super::Store;
use async_trait::async_trait;
use chuck_core::{error::ChuckError, session::Session, traits::SessionStore, LanguageCode};
use tracing::warn;

impl Store {
    /// Number of stored sessions.
    pub async fn session_count(&self) -> Result<i64, ChuckError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ChuckError::Memory(format!("query failed: {e}")))?;
        Ok(count)
    }
}

#[async_trait]
impl SessionStore for Store {
    async fn load(&self, user_id: &str) -> Result<Session, ChuckError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT language_code FROM sessions WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| ChuckError::Memory(format!("query failed: {e}")))?;

        let session = Session::new(user_id);
        match row {
            None => Ok(session),
            Some((code,)) => match LanguageCode::from_code(&code) {
                Some(language) => Ok(session.with_language(language)),
                None => {
                    warn!("session {user_id}: stored language code '{code}' is invalid, using default");
                    Ok(session)
                }
            },
        }
    }

    async fn save(&self, session: &Session) -> Result<(), ChuckError> {
        sqlx::query(
            "INSERT INTO sessions (user_id, language_code) VALUES (?, ?) \
             ON CONFLICT(user_id) DO UPDATE SET language_code = excluded.language_code, \
             updated_at = datetime('now')",
        )
        .bind(&session.user_id)
        .bind(session.language.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| ChuckError::Memory(format!("upsert session failed: {e}")))?;

        Ok(())
    }
}
