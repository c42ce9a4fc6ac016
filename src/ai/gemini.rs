//! Production adapter for the Gemini `generateContent` REST API.

use super::types::{Content, GenerateContentResponse, Modality};
use super::GenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Image-capable Gemini model the relay targets by default.
pub const DEFAULT_EDIT_MODEL: &str = "gemini-2.0-flash-preview-image-generation";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<Modality>,
}

/// Lightweight Gemini REST client.
pub struct GeminiEditClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiEditClient {
    /// Construct a Gemini client.
    ///
    /// `model` should be the bare model ID, not a `models/...`-prefixed path
    /// segment.
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: Client) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[async_trait]
impl GenerationService for GeminiEditClient {
    async fn generate_content(
        &self,
        contents: Vec<Content>,
        response_modalities: &[Modality],
    ) -> Result<GenerateContentResponse> {
        let request = GenerateContentRequest {
            contents,
            generation_config: GenerationConfig {
                response_modalities: response_modalities.to_vec(),
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Gemini API error (status {}): {}", status, error_text);
            return Err(Error::AiProvider(format!(
                "Gemini API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            Error::AiProvider(format!("Failed to parse Gemini response: {}", e))
        })
    }
}
