//! Per-user session state.

use crate::language::LanguageCode;

/// Persistent per-user preference record.
///
/// Created lazily on a user's first message and only mutated by a `/start`
/// (reset) or a successful "set language" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub language: LanguageCode,
}

impl Session {
    /// A fresh session in the default language.
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            language: LanguageCode::default(),
        }
    }

    /// Same user, different language.
    pub fn with_language(mut self, language: LanguageCode) -> Self {
        self.language = language;
        self
    }
}
