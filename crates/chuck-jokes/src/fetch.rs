//! Fetch the joke page and scrape it into an ordered list of jokes.

use chuck_core::{config::JokesConfig, error::ChuckError};
use reqwest::header::{ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;

/// HTTP fetcher for the joke page.
pub struct JokeFetcher {
    client: reqwest::Client,
    config: JokesConfig,
}

impl JokeFetcher {
    pub fn new(config: JokesConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// GET the page with browser-like headers and extract the jokes.
    pub async fn fetch(&self) -> Result<Vec<String>, ChuckError> {
        let resp = self
            .client
            .get(&self.config.url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(REFERER, &self.config.referer)
            .header(ACCEPT_LANGUAGE, &self.config.accept_language)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| ChuckError::Catalog(format!("fetch {} failed: {e}", self.config.url)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChuckError::Catalog(format!(
                "fetch {} failed with status {status}",
                self.config.url
            )));
        }

        let html = resp
            .text()
            .await
            .map_err(|e| ChuckError::Catalog(format!("failed to read joke page: {e}")))?;
        debug!("fetched joke page ({} bytes)", html.len());

        extract_jokes(&html, &self.config.selector)
    }
}

/// Every element matching `selector` is one joke, its text trimmed.
///
/// Blank items are kept so joke numbers follow the page. A page with no
/// matches is an error.
pub fn extract_jokes(html: &str, selector: &str) -> Result<Vec<String>, ChuckError> {
    let selector = Selector::parse(selector)
        .map_err(|e| ChuckError::Config(format!("invalid joke selector '{selector}': {e}")))?;

    let document = Html::parse_document(html);
    let jokes: Vec<String> = document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    if jokes.is_empty() {
        return Err(ChuckError::Catalog(
            "no jokes found in the HTML content".into(),
        ));
    }
    Ok(jokes)
}
