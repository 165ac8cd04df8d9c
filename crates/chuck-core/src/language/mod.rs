//! Language codes and the name-to-code resolver.
//!
//! A [`LanguageCode`] can only be obtained from the ISO 639-1 table, so any
//! value of the type is a valid two-letter code. Resolution is exact-name,
//! case-insensitive, against either the English or the native language name.

mod table;


pub use table::{Language, LANGUAGES};

use std::fmt;

/// A validated ISO 639-1 two-letter language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageCode(&'static Language);

impl LanguageCode {
    /// The code every session starts with.
    pub fn default_code() -> Self {
        Self::from_code("en").unwrap_or(Self(&LANGUAGES[0]))
    }

    /// Look up a raw two-letter code (e.g. a value read back from storage).
    pub fn from_code(code: &str) -> Option<Self> {
        LANGUAGES.iter().find(|l| l.code == code).map(Self)
    }

    /// The two-letter code, e.g. `"fr"`.
    pub fn as_str(&self) -> &'static str {
        self.0.code
    }

    /// English language name, e.g. `"French"`.
    pub fn name(&self) -> &'static str {
        self.0.name
    }

    /// Native language name, e.g. `"Français"`.
    pub fn native_name(&self) -> &'static str {
        self.0.native_name
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::default_code()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a human language name (`"french"`, `"Français"`) to its code.
///
/// Returns `None` when the name is not in the table; raw codes such as `"fr"`
/// are not names and do not resolve.
pub fn resolve(name: &str) -> Option<LanguageCode> {
    let wanted = name.to_lowercase();
    LANGUAGES
        .iter()
        .find(|l| l.name.to_lowercase() == wanted || l.native_name.to_lowercase() == wanted)
        .map(LanguageCode)
}
