//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "Chuck Bot".to_string()
}

pub fn default_data_dir() -> String {
    "~/.chuckbot".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_translator_endpoint() -> String {
    "https://api.cognitive.microsofttranslator.com".to_string()
}

pub fn default_translator_region() -> String {
    "global".to_string()
}

pub fn default_api_version() -> String {
    "3.0".to_string()
}

pub fn default_translator_timeout() -> u64 {
    15
}

pub fn default_jokes_url() -> String {
    "https://parade.com/968666/parade/chuck-norris-jokes/".to_string()
}

pub fn default_jokes_selector() -> String {
    ".m-detail--body li".to_string()
}

pub fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

pub fn default_referer() -> String {
    "https://www.google.com/".to_string()
}

pub fn default_accept_language() -> String {
    "en-US,en;q=0.9".to_string()
}

pub fn default_jokes_timeout() -> u64 {
    30
}

pub fn default_memory_backend() -> String {
    "sqlite".to_string()
}

pub fn default_db_path() -> String {
    "~/.chuckbot/data/sessions.db".to_string()
}
