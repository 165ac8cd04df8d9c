//! Azure Translator (Cognitive Services) text translation, API v3.
//!
//! Docs: <https://learn.microsoft.com/azure/ai-services/translator/reference/v3-0-translate>

use async_trait::async_trait;
use chuck_core::{
    config::TranslatorConfig, error::ChuckError, traits::Translator, LanguageCode,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Azure Translator client.
pub struct AzureTranslator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    region: String,
    api_version: String,
    timeout: Duration,
}

impl AzureTranslator {
    /// Create from config values.
    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            region: config.region.clone(),
            api_version: config.api_version.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    fn translate_url(&self) -> String {
        format!("{}/translate", self.endpoint)
    }
}

#[derive(Serialize)]
struct TranslateItem<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
}

#[derive(Deserialize)]
struct TranslateResult {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    text: String,
}

/// Pull the first translation out of an Azure response body.
fn extract_translation(results: Vec<TranslateResult>) -> Result<String, ChuckError> {
    results
        .into_iter()
        .next()
        .and_then(|r| r.translations.into_iter().next())
        .map(|t| t.text)
        .ok_or_else(|| ChuckError::Translation("empty translation response".into()))
}

#[async_trait]
impl Translator for AzureTranslator {
    fn name(&self) -> &str {
        "azure"
    }

    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, ChuckError> {
        let body = [TranslateItem { text }];

        let resp = self
            .client
            .post(self.translate_url())
            .query(&[("api-version", self.api_version.as_str()), ("to", target.as_str())])
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Ocp-Apim-Subscription-Region", &self.region)
            .header("X-ClientTraceId", Uuid::new_v4().to_string())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChuckError::Translation(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(ChuckError::Translation(format!(
                "azure API error {status}: {error_text}"
            )));
        }

        let results: Vec<TranslateResult> = resp
            .json()
            .await
            .map_err(|e| ChuckError::Translation(format!("response parse failed: {e}")))?;

        let translated = extract_translation(results)?;
        debug!("translated {} chars to {target}", text.len());
        Ok(translated)
    }
}
