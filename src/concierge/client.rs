//! Generative-language API client
//!
//! One call style: generate content from a prompt, optionally with an inline
//! image and a JSON response schema, for a given model.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ApiErrorResponse, ConciergeError, ConciergeResult};

/// Default endpoint of the generative-language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used for both the chat and the consultation
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Image sent alongside a prompt, base64-encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    /// Parse a `data:<mime>;base64,<data>` URL as produced by a browser file reader
    pub fn from_data_url(url: &str) -> ConciergeResult<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| ConciergeError::InvalidImage("not a data URL".to_string()))?;
        let (header, data) = rest
            .split_once(',')
            .ok_or_else(|| ConciergeError::InvalidImage("missing data section".to_string()))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| ConciergeError::InvalidImage("data URL is not base64".to_string()))?;

        if !mime_type.starts_with("image/") {
            return Err(ConciergeError::InvalidImage(format!(
                "unsupported type {}",
                mime_type
            )));
        }
        STANDARD
            .decode(data)
            .map_err(|e| ConciergeError::InvalidImage(e.to_string()))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Encode raw image bytes
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> ConciergeResult<Self> {
        if bytes.is_empty() {
            return Err(ConciergeError::InvalidImage("empty image".to_string()));
        }
        Ok(Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        })
    }

    /// Back to a data URL, for previews
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// A single generate-content call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub image: Option<InlineImage>,
    /// Ask for JSON matching this schema instead of free text
    pub response_schema: Option<Value>,
}

impl GenerationRequest {
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            image: None,
            response_schema: None,
        }
    }

    /// Builder method: attach an image
    pub fn with_image(mut self, image: Option<InlineImage>) -> Self {
        self.image = image;
        self
    }

    /// Builder method: request structured JSON output
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// Anything that can turn a prompt into text
///
/// Futures are not required to be `Send` so the browser build can use the
/// same client.
#[async_trait(?Send)]
pub trait TextGenerator {
    async fn generate(&self, request: GenerationRequest) -> ConciergeResult<String>;
}

/// Connection settings for [`GeminiClient`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// HTTP client for the generative-language API. No retries, no timeout.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> ConciergeResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ConciergeError::MissingApiKey);
        }
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait(?Send)]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> ConciergeResult<String> {
        let url = self.endpoint(&request.model);
        let body = GenerateContentRequest::from(&request);
        tracing::debug!(model = %request.model, image = request.image.is_some(), "Generating content");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            tracing::warn!(status = status.as_u16(), "Generate content failed: {}", message);
            return Err(ConciergeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.into_text()
    }
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl From<&GenerationRequest> for GenerateContentRequest {
    fn from(request: &GenerationRequest) -> Self {
        let mut parts = Vec::with_capacity(2);
        if let Some(image) = &request.image {
            parts.push(Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                }),
            });
        }
        parts.push(Part {
            text: Some(request.prompt.clone()),
            inline_data: None,
        });

        Self {
            contents: vec![Content { parts }],
            generation_config: request.response_schema.as_ref().map(|schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.clone(),
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn into_text(self) -> ConciergeResult<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            Err(ConciergeError::EmptyResponse)
        } else {
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inline_image_from_data_url() {
        let image = InlineImage::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw0KGgo=");
        assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_inline_image_rejects_bad_input() {
        for url in [
            "https://example.com/a.png",
            "data:image/png;base64",
            "data:image/png,raw",
            "data:text/plain;base64,aGk=",
            "data:image/jpeg;base64,***",
        ] {
            assert!(
                matches!(InlineImage::from_data_url(url), Err(ConciergeError::InvalidImage(_))),
                "{} should be rejected",
                url
            );
        }
    }

    #[test]
    fn test_inline_image_from_bytes() {
        let image = InlineImage::from_bytes("image/jpeg", b"hello").unwrap();
        assert_eq!(image.data, "aGVsbG8=");
        assert!(InlineImage::from_bytes("image/jpeg", b"").is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerationRequest::text(DEFAULT_MODEL, "Suggest a cut")
            .with_image(Some(InlineImage::from_bytes("image/jpeg", b"img").unwrap()))
            .with_schema(json!({"type": "OBJECT"}));

        let body = serde_json::to_value(GenerateContentRequest::from(&request)).unwrap();

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["text"], "Suggest a cut");
        assert!(parts[1].get("inlineData").is_none());
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_plain_text_request_has_no_generation_config() {
        let request = GenerationRequest::text(DEFAULT_MODEL, "Hello");
        let body = serde_json::to_value(GenerateContentRequest::from(&request)).unwrap();
        assert!(body.get("generationConfig").is_none());
        assert_eq!(body["contents"][0]["parts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_response_text_joins_first_candidate_parts() {
        let raw = json!({
            "candidates": [
                {"content": {"parts": [{"text": "Good "}, {"text": "evening."}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.into_text().unwrap(), "Good evening.");
    }

    #[test]
    fn test_response_without_text_is_empty() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": []})).unwrap();
        assert!(matches!(response.into_text(), Err(ConciergeError::EmptyResponse)));

        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert!(matches!(response.into_text(), Err(ConciergeError::EmptyResponse)));
    }

    #[test]
    fn test_client_requires_api_key() {
        assert!(matches!(
            GeminiClient::new(GeminiConfig::new("  ")),
            Err(ConciergeError::MissingApiKey)
        ));

        let mut config = GeminiConfig::new("key");
        config.base_url = "http://localhost:9000/v1beta/".to_string();
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(
            client.endpoint(DEFAULT_MODEL),
            "http://localhost:9000/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
