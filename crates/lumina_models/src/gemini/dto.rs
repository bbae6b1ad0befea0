//! Request and response shapes for the Gemini REST surface.
//!
//! Field names follow the wire's camelCase. Only the fields this driver
//! reads are modeled; unknown response fields are ignored.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Inline binary payload, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload
    pub mime_type: String,
    /// Base64 payload
    pub data: String,
}

/// One part of a content turn: text or inline binary data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// An inline base64 data part.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// One conversational turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Content {
    /// Parts making up the turn
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Turn role; the API accepts `user` and `model`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Content {
    /// A user turn with the given parts.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            parts,
            role: Some("user".to_string()),
        }
    }
}

/// Image output options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Output aspect ratio, e.g. `16:9`
    pub aspect_ratio: String,
    /// Resolution tier; only honored by quality-tier models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<lumina_core::ImageSize>,
}

/// Generation tuning accepted by the REST endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters, Default)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), default)]
pub struct GenerationConfig {
    /// Requested response MIME type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    /// Reply shape for JSON responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    /// Image output options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

impl GenerationConfig {
    /// Creates a new builder for `GenerationConfig`.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

/// Marker object enabling search grounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GoogleSearch {}

/// A tool made available to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Google-search grounding, enabled by presence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

impl Tool {
    /// The google-search grounding tool.
    pub fn google_search() -> Self {
        Self {
            google_search: Some(GoogleSearch {}),
        }
    }
}

/// Request body for `generateContent` and `streamGenerateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    /// Conversation turns
    contents: Vec<Content>,
    /// Generation tuning
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    /// Tools enabled for the request
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

impl GenerateContentRequest {
    /// Creates a new builder for `GenerateContentRequest`.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// A web grounding source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct WebSource {
    /// Source URI
    #[serde(default)]
    pub uri: Option<String>,
}

/// One grounding source consulted by the model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct GroundingChunk {
    /// Web source, when the chunk is a page
    #[serde(default)]
    pub web: Option<WebSource>,
}

/// Search-grounding block attached to a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Sources consulted
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Search grounding attached to this candidate
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Response body for `generateContent`; streaming delivers one per event.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct GenerateContentResponse {
    /// Ranked candidates; the first is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<Vec<_>>()
                    .concat()
            })
            .unwrap_or_default()
    }

    /// First inline-data part of the first candidate.
    pub fn inline_image(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }

    /// Grounding URIs attached to the first candidate, in reply order.
    pub fn grounding_uris(&self) -> Vec<String> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref()?.uri.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Outline reply item as the model returns it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct OutlineReply {
    /// Slide title
    #[serde(default)]
    pub title: String,
    /// Slide intent
    #[serde(default)]
    pub intent: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_core::ImageSize;

    #[test]
    fn request_serializes_camel_case() {
        let config = GenerationConfig::builder()
            .response_mime_type("application/json".to_string())
            .image_config(ImageConfig {
                aspect_ratio: "16:9".to_string(),
                image_size: Some(ImageSize::Size2K),
            })
            .build()
            .unwrap();
        let request = GenerateContentRequest::builder()
            .contents(vec![Content::user(vec![Part::text("hello")])])
            .generation_config(config)
            .build()
            .unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""generationConfig""#));
        assert!(json.contains(r#""responseMimeType":"application/json""#));
        assert!(json.contains(r#""imageConfig""#));
        assert!(json.contains(r#""aspectRatio":"16:9""#));
        assert!(json.contains(r#""imageSize":"2K""#));
        assert!(!json.contains("tools"));
    }

    #[test]
    fn search_tool_serializes_as_marker_object() {
        let value = serde_json::to_value(Tool::google_search()).unwrap();
        assert_eq!(value, serde_json::json!({"googleSearch": {}}));
    }

    #[test]
    fn inline_parts_carry_mime_and_data() {
        let json = serde_json::to_string(&Part::inline("image/jpeg", "QUJD")).unwrap();
        assert_eq!(json, r#"{"inlineData":{"mimeType":"image/jpeg","data":"QUJD"}}"#);
    }

    #[test]
    fn response_text_concatenates_parts() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Hello, "}, {"text": "world"}], "role": "model"}
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), "Hello, world");
    }

    #[test]
    fn inline_image_found_among_parts() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [
                    {"text": "here you go"},
                    {"inlineData": {"mimeType": "image/png", "data": "aWJ4"}}
                ]}
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let inline = response.inline_image().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "aWJ4");
    }

    #[test]
    fn grounding_uris_skip_sourceless_chunks() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "grounded"}]},
                "groundingMetadata": {"groundingChunks": [
                    {"web": {"uri": "https://example.com/a"}},
                    {},
                    {"web": {}}
                ]}
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.grounding_uris(), vec!["https://example.com/a"]);
    }

    #[test]
    fn empty_response_yields_empty_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
        assert!(response.inline_image().is_none());
        assert!(response.grounding_uris().is_empty());
    }
}
