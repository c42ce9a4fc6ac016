//! Wire-level data models and process configuration.

use serde::{Deserialize, Serialize};

/// Inbound body of `POST /api/edit-image-with-prompt`.
///
/// Fields default to empty strings so that a missing field reaches the
/// validator (which reports the contract's fixed 400 message) instead of
/// being rejected by the JSON extractor with a foreign error shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    #[serde(default)]
    pub image_data_b64: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub prompt: String,
}

/// 200 response: an edited image was produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSuccessResponse {
    pub edited_image_data_b64: String,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_response: Option<String>,
}

/// 202 response: the model answered with text only (refusal, clarification).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOnlyResponse {
    pub message: String,
    pub text_response: String,
}

/// 4xx/5xx response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. Absence is a per-request runtime error, never a
    /// startup error.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| crate::ai::DEFAULT_EDIT_MODEL.to_string()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string()),
        })
    }
}
