//! Canonical reply texts, in English. Every one of them is translated into
//! the user's language before delivery; [`PROCESSING_ERROR`] doubles as the
//! untranslated fallback when translation itself fails.

/// Acknowledgement after a successful "set language".
pub const LANGUAGE_SET: &str = "No problem";

pub const INVALID_LANGUAGE: &str =
    "Please provide a valid language name. Example: Set language french";

pub const INVALID_REQUEST: &str = "Please enter a valid request.";

pub const PROCESSING_ERROR: &str =
    "An error occurred while processing your request. Please try again later.";

/// Welcome text for `/start`. `catalog_size` is 0 while the catalog is not loaded.
pub fn welcome(catalog_size: usize) -> String {
    if catalog_size == 0 {
        "Welcome to Chuck Bot!\nSet language to your choice or enter a joke number \
         to get a Chuck Norris joke."
            .to_string()
    } else {
        format!(
            "Welcome to Chuck Bot!\nSet language to your choice or enter a number \
             between 1-{catalog_size} to get a Chuck Norris joke."
        )
    }
}

/// Reply for a joke number outside `1..=catalog_size`.
pub fn invalid_number(catalog_size: usize) -> String {
    format!("Please enter a valid number between 1 and {catalog_size}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_mentions_catalog_size() {
        assert_eq!(
            welcome(101),
            "Welcome to Chuck Bot!\nSet language to your choice or enter a number \
             between 1-101 to get a Chuck Norris joke."
        );
        assert!(!welcome(0).contains("1-0"));
    }

    #[test]
    fn test_invalid_number_uses_size() {
        assert_eq!(
            invalid_number(101),
            "Please enter a valid number between 1 and 101."
        );
    }
}
