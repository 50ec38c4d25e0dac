use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ModelClient;
use crate::domain::{DomainError, ModelPrompt};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
const API_KEY_HEADER: &str = "x-goog-api-key";

const TEMPERATURE: f32 = 0.9;
const TOP_K: u32 = 1;
const TOP_P: f32 = 1.0;
const MAX_OUTPUT_TOKENS: u32 = 8192;

const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";
const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for the Gemini `generateContent` API.
///
/// History turns are sent ahead of the instruction, which always goes last
/// as a `user` turn. Every call carries the same generation config and
/// safety settings.
///
/// The API key is optional at construction: a missing key only surfaces as
/// [`DomainError::Configuration`] when a request actually needs the model.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    /// Full endpoint URL (base + model path).
    url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let model: String = model.into();
        let base: String = base_url.into();
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            base.trim_end_matches('/'),
            model
        );
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_request(prompt: &ModelPrompt) -> GenerateRequest<'_> {
        let mut contents: Vec<Content<'_>> = prompt
            .history()
            .iter()
            .map(|turn| Content {
                role: turn.role.as_str(),
                parts: vec![RequestPart {
                    text: turn.text.as_str(),
                }],
            })
            .collect();

        contents.push(Content {
            role: "user",
            parts: vec![RequestPart {
                text: prompt.instruction(),
            }],
        });

        GenerateRequest {
            contents,
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
            safety_settings: SAFETY_CATEGORIES
                .into_iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: SAFETY_THRESHOLD,
                })
                .collect(),
        }
    }

    /// Concatenate the text parts of the first candidate.
    fn extract_text(response: GenerateResponse) -> Result<String, DomainError> {
        let block_reason = response.prompt_feedback.and_then(|f| f.block_reason);

        let Some(candidate) = response.candidates.into_iter().next() else {
            let reason = block_reason.unwrap_or_else(|| "no candidates returned".to_string());
            return Err(DomainError::upstream(
                None,
                format!("Gemini returned no reply: {reason}"),
            ));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "empty content".to_string());
            return Err(DomainError::upstream(
                None,
                format!("Gemini returned no text: {reason}"),
            ));
        }

        Ok(text)
    }

    /// Prefer the API's own error message over the raw body.
    fn error_details(body: &str) -> String {
        serde_json::from_str::<ErrorEnvelope>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.to_string())
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &ModelPrompt) -> Result<String, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::configuration("GEMINI_API_KEY is not set"))?;

        let request = Self::build_request(prompt);

        let response = self
            .client
            .post(&self.url)
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream(None, format!("Gemini request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(DomainError::upstream(
                Some(status.as_u16()),
                Self::error_details(&body),
            ));
        }

        let api_response: GenerateResponse = response.json().await.map_err(|e| {
            DomainError::upstream(None, format!("failed to parse Gemini response: {e}"))
        })?;

        let text = Self::extract_text(api_response)?;
        debug!("GeminiClient raw reply ({} bytes)", text.len());
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
