//! Upstream multimodal generation service integration.
//!
//! The generation provider is modeled as a capability trait with one
//! production adapter (HTTP client to the Gemini REST API) and one in-memory
//! test adapter, so nothing outside this module depends on a concrete SDK
//! shape.

pub mod gemini;
pub mod mock;
pub mod types;

pub use gemini::{GeminiEditClient, DEFAULT_EDIT_MODEL};
pub use mock::MockGenerationClient;
pub use types::{Candidate, Content, GenerateContentResponse, InlineData, Modality, Part};

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GenerationService: Send + Sync {
    /// One blocking round trip to the generation model. No retries.
    async fn generate_content(
        &self,
        contents: Vec<Content>,
        response_modalities: &[Modality],
    ) -> Result<GenerateContentResponse>;
}
