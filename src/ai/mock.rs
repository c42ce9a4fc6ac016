//! In-memory test adapter for the generation service.

use super::types::{Content, GenerateContentResponse, Modality};
use super::GenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted stand-in for the Gemini client.
///
/// Queued responses cycle by call order; an injected failure message makes
/// every call fail. Received payloads are recorded so tests can assert on
/// call counts and part ordering.
pub struct MockGenerationClient {
    responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    failure: Arc<Mutex<Option<String>>>,
    requests: Arc<Mutex<Vec<Vec<Content>>>>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Contents of the n-th received request, if any.
    pub fn request_contents(&self, n: usize) -> Option<Vec<Content>> {
        self.requests.lock().unwrap().get(n).cloned()
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for MockGenerationClient {
    async fn generate_content(
        &self,
        contents: Vec<Content>,
        _response_modalities: &[Modality],
    ) -> Result<GenerateContentResponse> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(contents);
        let count = requests.len();
        drop(requests);

        if let Some(message) = self.failure.lock().unwrap().as_ref() {
            return Err(Error::AiProvider(message.clone()));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Empty envelope: no candidates, no text.
            Ok(GenerateContentResponse::default())
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Part;

    fn image_response(data: &str) -> GenerateContentResponse {
        serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "inlineData": { "mimeType": "image/png", "data": data } }]
                }
            }]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_default_response_is_empty_envelope() {
        let client = MockGenerationClient::new();

        let response = client
            .generate_content(vec![], &[Modality::Image])
            .await
            .unwrap();

        assert!(response.candidates.is_empty());
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_queued_responses_cycle() {
        let client = MockGenerationClient::new()
            .with_response(image_response("Zmlyc3Q="))
            .with_response(image_response("c2Vjb25k"));

        for expected in ["Zmlyc3Q=", "c2Vjb25k", "Zmlyc3Q="] {
            let response = client
                .generate_content(vec![], &[Modality::Image])
                .await
                .unwrap();
            let content = response.candidates[0].content.as_ref().unwrap();
            assert!(matches!(
                &content.parts[0],
                Part::InlineData { inline_data } if inline_data.data == expected
            ));
        }
    }

    #[tokio::test]
    async fn test_failure_is_returned_and_recorded() {
        let client = MockGenerationClient::new().with_failure("connection reset");

        let err = client
            .generate_content(vec![], &[Modality::Image])
            .await
            .unwrap_err();

        assert!(matches!(err, Error::AiProvider(ref msg) if msg == "connection reset"));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_contents_are_recorded() {
        let client = MockGenerationClient::new();

        let contents = vec![Content {
            role: None,
            parts: vec![Part::Text {
                text: "hello".to_string(),
            }],
        }];
        client
            .generate_content(contents, &[Modality::Text])
            .await
            .unwrap();

        let recorded = client.request_contents(0).unwrap();
        assert!(matches!(&recorded[0].parts[0], Part::Text { text } if text == "hello"));
        assert!(client.request_contents(1).is_none());
    }
}
