//! Generation client — the single point of entry for all hosted text
//! generation calls in the NightShade API.
//!
//! ARCHITECTURAL RULE: no other module may call the Gemini API directly.
//! All generation traffic MUST go through this module.
//!
//! Model: gemini-2.5-flash-lite (hardcoded — do not make configurable to
//! prevent drift). One request, one response: no retries, no streaming,
//! no caching. The only timeout is the transport timeout.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all generation calls.
pub const MODEL: &str = "gemini-2.5-flash-lite";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation API key is not configured")]
    MissingKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Generation returned no usable content")]
    EmptyResponse,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format (Gemini generateContent)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    system_instruction: InstructionPart<'a>,
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct InstructionPart<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate, if any.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let mut out = String::new();
        for part in &content.parts {
            if let Some(text) = part.text.as_deref() {
                out.push_str(text);
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Trait seam over the generation call so the chat orchestration can be
/// exercised with an in-memory double. Carried in `AppState` as the concrete
/// `GeminiClient`; generic callers take `&dyn Generator`.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
        temperature: f32,
    ) -> Result<String, GenerationError>;
}

/// The single generation client used by both chat surfaces.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Builds the client. `api_key = None` is a valid configuration: every
    /// call then classifies as `MissingKey` until the service restarts with
    /// a key present.
    pub fn new(api_key: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
        })
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl Generator for GeminiClient {
    /// Makes one generateContent call and returns the trimmed reply text.
    ///
    /// A whitespace-only reply is a *success* with an empty string — the
    /// session layer substitutes its placeholder copy. A structurally empty
    /// payload (no candidates, no text parts) is `EmptyResponse`.
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
        temperature: f32,
    ) -> Result<String, GenerationError> {
        let api_key = self.api_key.as_deref().ok_or(GenerationError::MissingKey)?;

        let request_body = GenerateContentRequest {
            system_instruction: InstructionPart {
                parts: vec![TextPart {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: user_text }],
            }],
            generation_config: GenerationConfig { temperature },
        };

        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the structured error message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Generation API returned {status}: {message}");
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload.text().ok_or(GenerationError::EmptyResponse)?;

        debug!("Generation call succeeded ({} chars)", text.len());

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"The void "},{"text":"listens."}]}}]}"#,
        );
        assert_eq!(response.text().as_deref(), Some("The void listens."));
    }

    #[test]
    fn test_response_text_no_candidates() {
        let response = parse(r#"{"candidates":[]}"#);
        assert!(response.text().is_none());
    }

    #[test]
    fn test_response_text_missing_content() {
        let response = parse(r#"{"candidates":[{"content":null}]}"#);
        assert!(response.text().is_none());
    }

    #[tokio::test]
    async fn test_missing_key_is_stable() {
        let client = GeminiClient::new(None).unwrap();
        for _ in 0..3 {
            let err = client.generate("persona", "hello", 0.8).await.unwrap_err();
            assert!(matches!(err, GenerationError::MissingKey));
        }
    }
}
