//! The hosted-model client and its three operations.
//!
//! One thin wrapper per remote capability: stature analysis (structured
//! JSON output), image editing (inline image output), and
//! search-grounded news. Each call is independent and stateless: no
//! retries, no backoff, no caching; timeouts are the transport's own.

use gloo_net::http::Request;

use stature_core::{EstimationResult, NewsDigest, NewsSource, ReferenceType};

use crate::error::ApiError;
use crate::wire::{Content, GenerateRequest, GenerateResponse, GenerationConfig, Part, Tool};

/// Endpoint root for `generateContent` calls.
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model for the structured height-estimation call.
const ANALYSIS_MODEL: &str = "gemini-3-pro-preview";
/// Model for conversational image editing.
const EDIT_MODEL: &str = "gemini-2.5-flash-image";
/// Model for search-grounded text.
const NEWS_MODEL: &str = "gemini-3-flash-preview";

/// MIME type attached to uploaded photos in requests.
///
/// The service re-detects the actual format from the payload, so a
/// fixed label is sufficient here.
const INLINE_MIME: &str = "image/jpeg";

/// Query used when the news panel is refreshed without a custom query.
pub const DEFAULT_NEWS_QUERY: &str =
    "Latest breakthrough in human anthropometry and health technology";

/// Client for the hosted generative models.
///
/// Holds only the injected API credential; cheap to clone.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
}

impl GeminiClient {
    /// Create a client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// POST one `generateContent` request and decode the envelope.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, ApiError> {
        let url = format!("{API_BASE}/{model}:generateContent");
        let response = Request::post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .map_err(|e| ApiError::Http(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Estimate the subject's height from a photo.
    ///
    /// Sends the photo with an instruction embedding the footwear
    /// status and the reference object's known size, and declares a
    /// strict response schema. The response text is decoded into an
    /// [`EstimationResult`]; any missing required field or type
    /// mismatch surfaces as [`ApiError::Decode`].
    ///
    /// # Errors
    ///
    /// [`ApiError::MalformedImage`] if `image_data_url` carries no
    /// base64 payload, [`ApiError::Http`]/[`ApiError::Status`] on
    /// transport failure, [`ApiError::EmptyResponse`] when the model
    /// returns no text, and [`ApiError::Decode`] on contract mismatch.
    #[allow(clippy::future_not_send)]
    pub async fn analyze(
        &self,
        image_data_url: &str,
        reference: ReferenceType,
        wearing_shoes: bool,
    ) -> Result<EstimationResult, ApiError> {
        let payload = base64_payload(image_data_url)?;
        let request = analysis_request(payload, reference, wearing_shoes);
        let response = self.generate(ANALYSIS_MODEL, &request).await?;
        let text = response.text().ok_or(ApiError::EmptyResponse)?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Apply a free-text edit instruction to the photo.
    ///
    /// Returns the first inline image of the response re-encoded as a
    /// PNG data URL.
    ///
    /// # Errors
    ///
    /// [`ApiError::NoImageReturned`] when the model answers with text
    /// only, an expected outcome distinct from transport failure.
    /// Also the transport and payload errors of [`Self::analyze`].
    #[allow(clippy::future_not_send)]
    pub async fn edit_image(
        &self,
        image_data_url: &str,
        prompt: &str,
    ) -> Result<String, ApiError> {
        let payload = base64_payload(image_data_url)?;
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part::inline(INLINE_MIME, payload), Part::text(prompt)],
            }],
            generation_config: None,
            tools: None,
        };
        let response = self.generate(EDIT_MODEL, &request).await?;
        response
            .first_inline_image()
            .map(|image| format!("data:image/png;base64,{}", image.data))
            .ok_or(ApiError::NoImageReturned)
    }

    /// Fetch a search-grounded news digest for `query`.
    ///
    /// Missing or partial grounding metadata is tolerated: sources
    /// without a web entry are skipped, titles default to
    /// `"Reference"`, and an empty source list is a valid result.
    ///
    /// # Errors
    ///
    /// Only transport errors; nothing about the response shape is
    /// fatal here.
    #[allow(clippy::future_not_send)]
    pub async fn fetch_news(&self, query: &str) -> Result<NewsDigest, ApiError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part::text(query)],
            }],
            generation_config: None,
            tools: Some(vec![Tool::google_search()]),
        };
        let response = self.generate(NEWS_MODEL, &request).await?;
        Ok(digest_from_response(&response))
    }
}

/// Extract the base64 payload of a `data:<mime>;base64,…` URL.
fn base64_payload(data_url: &str) -> Result<&str, ApiError> {
    match data_url.split_once(',') {
        Some((_, payload)) if !payload.is_empty() => Ok(payload),
        _ => Err(ApiError::MalformedImage),
    }
}

/// Build the analysis request: instruction, photo, and output schema.
fn analysis_request(
    image_base64: &str,
    reference: ReferenceType,
    wearing_shoes: bool,
) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![
                Part::text(analysis_prompt(reference, wearing_shoes)),
                Part::inline(INLINE_MIME, image_base64),
            ],
        }],
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".to_owned(),
            response_schema: analysis_schema(),
        }),
        tools: None,
    }
}

/// The natural-language analysis instruction.
fn analysis_prompt(reference: ReferenceType, wearing_shoes: bool) -> String {
    let footwear = if wearing_shoes {
        "wearing shoes"
    } else {
        "barefoot"
    };
    format!(
        "Analyze this full-body image for scientific height estimation.\n\
         User specifies they are {footwear}.\n\
         The reference scale provided is: {}.\n\
         \n\
         1. Detect skeletal landmarks: vertex (top of head), chin, acromion \
         (shoulders), greater trochanter (hips), patella (knees), and lateral \
         malleolus (ankles). Report each as x/y coordinates in a normalized \
         0-1000 space.\n\
         2. Calculate the pixel height of the individual from vertex to malleolus.\n\
         3. If a reference object is present (e.g., door, card), use it to \
         calibrate the pixel-to-cm ratio.\n\
         4. Estimate the camera's tilt and distance to apply perspective correction.\n\
         5. Calculate anthropometric ratios: Head-to-Stature, Leg-to-Torso.\n\
         6. Return a scientifically grounded estimate of the person's height in cm.\n\
         \n\
         Return the data in valid JSON format.",
        reference.scale_hint(),
    )
}

/// The declared response schema for the analysis call.
///
/// Required set intentionally excludes `ratios` and
/// `cameraPerspective`: the model omits them often enough that the
/// contract keeps them optional.
fn analysis_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "estimatedHeightCm": { "type": "NUMBER" },
            "confidenceRangeCm": {
                "type": "ARRAY",
                "items": { "type": "NUMBER" }
            },
            "landmarks": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "x": { "type": "NUMBER", "description": "x coordinate 0-1000" },
                        "y": { "type": "NUMBER", "description": "y coordinate 0-1000" },
                        "label": { "type": "STRING" }
                    }
                }
            },
            "ratios": {
                "type": "OBJECT",
                "properties": {
                    "headToBody": { "type": "NUMBER" },
                    "legToTorso": { "type": "NUMBER" },
                    "armLengthRatio": { "type": "NUMBER" }
                }
            },
            "analysis": { "type": "STRING" },
            "cameraPerspective": {
                "type": "OBJECT",
                "properties": {
                    "tiltAngleDegrees": { "type": "NUMBER" },
                    "estimatedDistanceMeters": { "type": "NUMBER" }
                }
            }
        },
        "required": ["estimatedHeightCm", "confidenceRangeCm", "landmarks", "analysis"]
    })
}

/// Convert a news response into a [`NewsDigest`], tolerating partial
/// grounding metadata.
fn digest_from_response(response: &GenerateResponse) -> NewsDigest {
    let text = response
        .text()
        .unwrap_or_else(|| "No news found.".to_owned());

    let sources = response
        .candidates
        .first()
        .and_then(|candidate| candidate.grounding_metadata.as_ref())
        .map(|metadata| {
            metadata
                .grounding_chunks
                .iter()
                .filter_map(|chunk| chunk.web.as_ref())
                .map(|web| NewsSource {
                    title: web
                        .title
                        .clone()
                        .unwrap_or_else(|| "Reference".to_owned()),
                    uri: web.uri.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    NewsDigest { text, sources }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- base64_payload ---

    #[test]
    fn payload_extraction_strips_the_prefix() {
        assert_eq!(
            base64_payload("data:image/jpeg;base64,SGVsbG8=").unwrap(),
            "SGVsbG8=",
        );
    }

    #[test]
    fn payload_extraction_rejects_missing_comma() {
        assert!(matches!(
            base64_payload("SGVsbG8="),
            Err(ApiError::MalformedImage)
        ));
    }

    #[test]
    fn payload_extraction_rejects_empty_payload() {
        assert!(matches!(
            base64_payload("data:image/jpeg;base64,"),
            Err(ApiError::MalformedImage)
        ));
    }

    // --- analysis request construction ---

    #[test]
    fn prompt_embeds_footwear_and_scale_hint() {
        let prompt = analysis_prompt(ReferenceType::Door, true);
        assert!(prompt.contains("wearing shoes"));
        assert!(prompt.contains("203cm"));

        let prompt = analysis_prompt(ReferenceType::None, false);
        assert!(prompt.contains("barefoot"));
        assert!(prompt.contains("7.5 heads"));
    }

    #[test]
    fn analysis_request_carries_prompt_then_image() {
        let request = analysis_request("AA==", ReferenceType::SodaCan, false);
        assert_eq!(request.contents.len(), 1);
        let parts = &request.contents[0].parts;
        assert_eq!(parts.len(), 2);
        assert!(parts[0].text.as_deref().is_some_and(|t| t.contains("12.2cm")));
        let inline = parts[1].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "image/jpeg");
        assert_eq!(inline.data, "AA==");
    }

    #[test]
    fn analysis_request_declares_json_output() {
        let request = analysis_request("AA==", ReferenceType::None, false);
        let config = request.generation_config.unwrap();
        assert_eq!(config.response_mime_type, "application/json");
    }

    #[test]
    fn schema_requires_exactly_the_core_fields() {
        let schema = analysis_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect();
        assert_eq!(
            required,
            vec!["estimatedHeightCm", "confidenceRangeCm", "landmarks", "analysis"],
        );
        // Optional sections are still described.
        assert!(schema["properties"]["ratios"].is_object());
        assert!(schema["properties"]["cameraPerspective"].is_object());
    }

    // --- analysis decode path ---

    #[test]
    fn analysis_response_text_decodes_into_the_contract() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":
                "{\"estimatedHeightCm\":178.2,\"confidenceRangeCm\":[174.0,182.5],\"landmarks\":[{\"x\":500,\"y\":40,\"label\":\"vertex\"}],\"analysis\":\"ok\"}"
            }]}}]}"#,
        )
        .unwrap();
        let text = response.text().unwrap();
        let result: EstimationResult = serde_json::from_str(&text).unwrap();
        assert!((result.estimated_height_cm - 178.2).abs() < f64::EPSILON);
        assert!(result.ratios.is_none());
    }

    #[test]
    fn analysis_response_missing_required_field_fails_decode() {
        let text = r#"{"confidenceRangeCm":[174.0,182.5],"landmarks":[],"analysis":"ok"}"#;
        assert!(serde_json::from_str::<EstimationResult>(text).is_err());
    }

    // --- news digest extraction ---

    #[test]
    fn digest_collects_sources_and_defaults_titles() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{
                "content":{"parts":[{"text":"Summary."}]},
                "groundingMetadata":{"groundingChunks":[
                    {"web":{"uri":"https://a.example","title":"A"}},
                    {"web":{"uri":"https://b.example"}},
                    {}
                ]}
            }]}"#,
        )
        .unwrap();
        let digest = digest_from_response(&response);
        assert_eq!(digest.text, "Summary.");
        assert_eq!(digest.sources.len(), 2);
        assert_eq!(digest.sources[0].title, "A");
        assert_eq!(digest.sources[1].title, "Reference");
        assert_eq!(digest.sources[1].uri, "https://b.example");
    }

    #[test]
    fn digest_with_no_metadata_is_empty_not_an_error() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Summary."}]}}]}"#,
        )
        .unwrap();
        let digest = digest_from_response(&response);
        assert_eq!(digest.text, "Summary.");
        assert!(digest.sources.is_empty());
    }

    #[test]
    fn digest_with_no_text_uses_fallback() {
        let response = GenerateResponse::default();
        let digest = digest_from_response(&response);
        assert_eq!(digest.text, "No news found.");
        assert!(digest.sources.is_empty());
    }

    #[test]
    fn default_query_mentions_the_domain() {
        assert!(DEFAULT_NEWS_QUERY.contains("anthropometry"));
    }
}
