//! Message classification.

/// Reserved start command, matched on the whole trimmed text.
pub const START_TOKEN: &str = "/start";

/// Substring that turns any message into a language change request.
pub const SET_LANGUAGE_TRIGGER: &str = "set language";

/// What an inbound message asks for. Derived from text alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Start,
    /// Carries the candidate language name: the last space-separated token.
    SetLanguage(String),
    /// Carries the 1-based ordinal as typed.
    JokeRequest(i64),
    Unrecognized,
}

impl Intent {
    /// Classify message text. First match wins: start, set language, number.
    pub fn classify(text: &str) -> Self {
        let trimmed = text.trim();

        if trimmed.to_lowercase() == START_TOKEN {
            return Self::Start;
        }

        if text.to_lowercase().contains(SET_LANGUAGE_TRIGGER) {
            let candidate = text.rsplit(' ').next().unwrap_or_default();
            return Self::SetLanguage(candidate.to_string());
        }

        match parse_ordinal(trimmed) {
            Some(n) => Self::JokeRequest(n),
            None => Self::Unrecognized,
        }
    }
}

/// Parse a base-10 integer with an optional sign.
///
/// Digit strings too long for `i64` saturate, so they still classify as a
/// joke request and fail the range check rather than becoming unrecognized.
fn parse_ordinal(s: &str) -> Option<i64> {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match s.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if s.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
