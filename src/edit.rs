//! Request validation and edit orchestration.
//!
//! One round trip per request: validate → build the two-part payload →
//! invoke the generation service → classify the result. No state is shared
//! between requests.

use crate::ai::{Content, GenerationService, InlineData, Modality, Part};
use crate::models::EditRequest;
use crate::{Error, Result};
use std::sync::Arc;

/// Fixed explanatory string for the 202 text-only outcome.
pub const TEXT_ONLY_MESSAGE: &str =
    "Received a text response, potentially an error or explanation from the model.";

/// Classified result of one edit round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The model produced an edited image (HTTP 200).
    Edited {
        edited_image_data_b64: String,
        mime_type: String,
        text_response: Option<String>,
    },
    /// The model answered with text only (HTTP 202).
    TextOnly { text: String },
}

/// Fails fast when any required field is missing or empty. Pure check, no
/// side effects; the orchestrator is never invoked after a failure.
pub fn validate_edit_request(request: &EditRequest) -> Result<()> {
    if request.image_data_b64.is_empty() || request.mime_type.is_empty() || request.prompt.is_empty()
    {
        return Err(Error::Validation(
            "Missing imageDataB64, mimeType, or prompt".to_string(),
        ));
    }
    Ok(())
}

/// Drives one round trip to the upstream generation service and classifies
/// its result.
pub struct EditOrchestrator {
    upstream: Arc<dyn GenerationService>,
    /// Injected at construction so tests can exercise the missing-credential
    /// path without environment mutation. The production adapter holds the
    /// actual key; only presence is checked here.
    api_key: Option<String>,
}

impl EditOrchestrator {
    pub fn new(upstream: Arc<dyn GenerationService>, api_key: Option<String>) -> Self {
        Self { upstream, api_key }
    }

    /// Precondition: `request` passed [`validate_edit_request`].
    pub async fn edit(&self, request: &EditRequest) -> Result<EditOutcome> {
        if self.api_key.is_none() {
            tracing::error!("GEMINI_API_KEY not configured; refusing to call upstream");
            return Err(Error::ApiKeyMissing);
        }

        // Image part first, prompt second: subject-then-instruction framing.
        let contents = vec![Content {
            role: None,
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: request.mime_type.clone(),
                        data: request.image_data_b64.clone(),
                    },
                },
                Part::Text {
                    text: request.prompt.clone(),
                },
            ],
        }];

        let response = self
            .upstream
            .generate_content(contents, &[Modality::Image, Modality::Text])
            .await?;

        // Only the first candidate is consulted; later candidates are
        // ignored (single-best-result policy).
        if let Some(content) = response.candidates.first().and_then(|c| c.content.as_ref()) {
            let mut selected_image: Option<&InlineData> = None;
            for part in &content.parts {
                if let Part::InlineData { inline_data } = part {
                    if !inline_data.data.is_empty() && inline_data.mime_type.starts_with("image/") {
                        selected_image = Some(inline_data);
                        break;
                    }
                }
            }

            let mut selected_text: Option<&str> = None;
            for part in &content.parts {
                if let Part::Text { text } = part {
                    if !text.is_empty() {
                        selected_text = Some(text);
                        break;
                    }
                }
            }

            if let Some(inline_data) = selected_image {
                return Ok(EditOutcome::Edited {
                    edited_image_data_b64: inline_data.data.clone(),
                    mime_type: inline_data.mime_type.clone(),
                    text_response: selected_text.map(str::to_string),
                });
            }
        }

        // No usable image anywhere; fall back to whatever text the model
        // produced (likely a refusal or clarification).
        let aggregate = response.aggregate_text();
        if !aggregate.is_empty() {
            return Ok(EditOutcome::TextOnly { text: aggregate });
        }

        Err(Error::NoUsableContent)
    }
}
