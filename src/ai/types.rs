//! Shared Gemini payload types used in both requests and responses.

use serde::{Deserialize, Serialize};

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload carrying image data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Response modality requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    Image,
    Text,
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
///
/// `content` can be absent, for example on safety-blocked candidates.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenation of the first candidate's text parts.
    ///
    /// Mirrors the upstream SDK's `.text` convenience getter: only the first
    /// candidate is consulted, and non-text parts are skipped.
    pub fn aggregate_text(&self) -> String {
        let mut out = String::new();
        if let Some(content) = self.candidates.first().and_then(|c| c.content.as_ref()) {
            for part in &content.parts {
                if let Part::Text { text } = part {
                    out.push_str(text);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_part_decodes_text_variant() {
        let part: Part = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert!(matches!(part, Part::Text { ref text } if text == "hello"));
    }

    #[test]
    fn test_part_decodes_inline_data_variant() {
        let part: Part =
            serde_json::from_str(r#"{"inlineData":{"mimeType":"image/png","data":"QUJD"}}"#)
                .unwrap();

        match part {
            Part::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/png");
                assert_eq!(inline_data.data, "QUJD");
            }
            Part::Text { .. } => panic!("expected inlineData variant"),
        }
    }

    #[test]
    fn test_inline_data_serializes_camel_case() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/jpeg".to_string(),
                data: "QUJD".to_string(),
            },
        };

        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(json["inlineData"]["data"], "QUJD");
    }

    #[test]
    fn test_modality_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value([Modality::Image, Modality::Text]).unwrap(),
            serde_json::json!(["IMAGE", "TEXT"])
        );
    }

    #[test]
    fn test_response_tolerates_missing_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
        assert_eq!(response.aggregate_text(), "");
    }

    #[test]
    fn test_aggregate_text_joins_first_candidate_text_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [
                    {"text": "I cannot "},
                    {"inlineData": {"mimeType": "audio/ogg", "data": "QUJD"}},
                    {"text": "edit this image"}
                ]}},
                {"content": {"parts": [{"text": "second candidate is ignored"}]}}
            ]
        }))
        .unwrap();

        assert_eq!(response.aggregate_text(), "I cannot edit this image");
    }

    #[test]
    fn test_aggregate_text_handles_blocked_candidate() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({"candidates": [{"finishReason": "SAFETY"}]}))
                .unwrap();

        assert_eq!(response.aggregate_text(), "");
    }
}
