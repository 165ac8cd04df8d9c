use thiserror::Error;

/// Top-level error type for chuckbot.
#[derive(Debug, Error)]
pub enum ChuckError {
    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// The translation backend could not produce a translation.
    #[error("translation unavailable: {0}")]
    Translation(String),

    /// Joke catalog acquisition failed.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Session storage error.
    #[error("memory error: {0}")]
    Memory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_concern() {
        assert_eq!(
            ChuckError::Translation("503".into()).to_string(),
            "translation unavailable: 503"
        );
        assert_eq!(
            ChuckError::Memory("disk full".into()).to_string(),
            "memory error: disk full"
        );
    }
}
