//! Wire types for the `generateContent` endpoint.
//!
//! A minimal serde mirror of the hosted model's request/response JSON:
//! only the fields this application reads or writes. Unknown response
//! fields are ignored; every response field we do read is `default`ed
//! so partial payloads degrade to `None`/empty instead of failing the
//! whole decode.

use serde::{Deserialize, Serialize};

/// A `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Ordered message contents (this app always sends exactly one).
    pub contents: Vec<Content>,
    /// Structured-output settings (analysis call only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    /// Enabled tools (news call only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

/// One message: an ordered list of parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Text and/or inline-binary parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One content part: text, inline binary data, or (in responses we
/// don't fully model) something else entirely — hence both optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Base64-encoded binary payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// A text-only part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// An inline-binary part.
    #[must_use]
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

/// Base64-encoded binary content with its MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload (e.g. `image/jpeg`).
    pub mime_type: String,
    /// Base64 payload, no data-URL prefix.
    pub data: String,
}

/// Structured-output settings for the analysis call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always `application/json` here.
    pub response_mime_type: String,
    /// Declared response schema (service-side validation).
    pub response_schema: serde_json::Value,
}

/// A tool declaration. Only search grounding is used.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Empty object enables the built-in web search tool.
    pub google_search: serde_json::Value,
}

impl Tool {
    /// The web-search grounding tool.
    #[must_use]
    pub fn google_search() -> Self {
        Self {
            google_search: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// A `generateContent` response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    /// Response candidates; the first is the one consumed.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One response candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content.
    #[serde(default)]
    pub content: Option<Content>,
    /// Search-grounding metadata, present when a search tool ran.
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Grounding metadata attached to a search-augmented candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Source chunks backing the generated text.
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One grounding source; only web sources are consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    /// Web source, when this chunk refers to one.
    #[serde(default)]
    pub web: Option<WebSource>,
}

/// A web grounding source.
#[derive(Debug, Clone, Deserialize)]
pub struct WebSource {
    /// Link target.
    pub uri: String,
    /// Page title; frequently absent.
    #[serde(default)]
    pub title: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's text parts, or `None`
    /// when there is no text at all.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let mut out = String::new();
        for part in &content.parts {
            if let Some(ref text) = part.text {
                out.push_str(text);
            }
        }
        if out.is_empty() { None } else { Some(out) }
    }

    /// The first inline-binary part of the first candidate, if any.
    #[must_use]
    pub fn first_inline_image(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }
}
