//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue, RETRY_AFTER};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    ApiCredential, AppError, GeminiApiConfig, ImageEncoding, ImagePayload, NarrativeResult,
    ResponsePart,
};
use crate::ports::NarrativeClient;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const DEFAULT_STATUS_MESSAGE: &str = "Generation request failed";

/// HTTP transport for the generation API.
///
/// This client performs a single request per call. Retry behavior is implemented
/// by [`RetryingNarrativeClient`](super::RetryingNarrativeClient).
#[derive(Clone)]
pub struct HttpNarrativeClient {
    credential: ApiCredential,
    api_url: Url,
    text_model: String,
    image_model: String,
    client: Client,
}

impl std::fmt::Debug for HttpNarrativeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpNarrativeClient")
            .field("api_url", &self.api_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpNarrativeClient {
    /// Create a new HTTP client with the given credential and configuration.
    pub fn new(credential: ApiCredential, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::generation_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            credential,
            api_url: config.api_url.clone(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            client,
        })
    }

    fn endpoint(&self, model: &str) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/models/{}:generateContent", base, model))
            .map_err(|e| AppError::config_error(format!("Invalid generation endpoint: {}", e)))
    }

    fn send_request(&self, model: &str, request: &ApiRequest) -> Result<Vec<ResponsePart>, AppError> {
        let url = self.endpoint(model)?;
        debug!(%model, "sending generateContent request");

        let response = self
            .client
            .post(url)
            .header(X_GOOG_API_KEY, self.credential.expose())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| {
                AppError::generation_error(format!("HTTP request failed: {}", e))
            })?;

        let status = response.status();
        let retry_after_ms = response.headers().get(RETRY_AFTER).and_then(parse_retry_after_ms);
        // A body that cannot be read is a transport failure, not a malformed response.
        let body_text = response.text().map_err(|e| {
            AppError::generation_error(format!("Failed to read response body: {}", e))
        })?;

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
                AppError::generation_status(format!("Failed to parse response: {}", e), status.as_u16())
            })?;
            return decode_parts(api_response)
                .map_err(|message| AppError::generation_status(message, status.as_u16()));
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::Generation { message, status: Some(status.as_u16()), retry_after_ms })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl ApiRequest {
    fn text(prompt: &str) -> Self {
        Self {
            contents: vec![Content { parts: vec![TextPart { text: prompt.to_string() }] }],
            generation_config: None,
        }
    }

    fn text_and_image(prompt: &str) -> Self {
        Self {
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["TEXT", "IMAGE"],
            }),
            ..Self::text(prompt)
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Parts of the first candidate, in response order.
fn decode_parts(response: ApiResponse) -> Result<Vec<ResponsePart>, String> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .map(|reason| format!(" (blocked: {})", reason))
            .unwrap_or_default();
        return Err(format!("Response contained no candidates{}", reason));
    };

    let parts = candidate.content.map(|content| content.parts).unwrap_or_default();
    let mut decoded = Vec::with_capacity(parts.len());
    for part in parts {
        if let Some(inline) = part.inline_data {
            let bytes = STANDARD
                .decode(inline.data.trim())
                .map_err(|e| format!("Failed to decode inline {} data: {}", inline.mime_type, e))?;
            decoded.push(ResponsePart::Image(ImagePayload::new(
                bytes,
                ImageEncoding::from_mime(&inline.mime_type),
            )));
        } else if let Some(text) = part.text {
            decoded.push(ResponsePart::Text(text));
        }
    }
    Ok(decoded)
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn parse_retry_after_ms(value: &HeaderValue) -> Option<u64> {
    let raw = value.to_str().ok()?.trim();
    let seconds = raw.parse::<u64>().ok()?;
    Some(seconds.saturating_mul(1000))
}

impl NarrativeClient for HttpNarrativeClient {
    fn generate_text(&self, prompt: &str) -> Result<NarrativeResult, AppError> {
        let parts = self.send_request(&self.text_model, &ApiRequest::text(prompt))?;

        let texts: Vec<String> = parts
            .into_iter()
            .filter_map(|part| match part {
                ResponsePart::Text(text) => Some(text),
                ResponsePart::Image(_) => None,
            })
            .collect();
        if texts.is_empty() {
            return Err(AppError::generation_error("Response contained no text parts"));
        }

        Ok(NarrativeResult::new(texts.concat()))
    }

    fn generate_images(&self, prompt: &str) -> Result<Vec<ImagePayload>, AppError> {
        let parts = self.send_request(&self.image_model, &ApiRequest::text_and_image(prompt))?;

        let mut images = Vec::new();
        for part in parts {
            match part {
                ResponsePart::Image(image) => images.push(image),
                ResponsePart::Text(text) => {
                    debug!(chars = text.len(), "ignoring text part of image response")
                }
            }
        }
        if images.is_empty() {
            warn!(model = %self.image_model, "image response contained no images");
        }

        Ok(images)
    }
}
