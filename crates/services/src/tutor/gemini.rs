use std::env;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use syllabus_core::model::{Document, TeachingSession, TopicDraft};

use super::Tutor;
use super::prompts::{EXTRACTION_PROMPT, lesson_schema, teaching_prompt, topics_schema};
use crate::error::{ExtractionError, GenerationError, TutorError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_TIMEOUT_MS: u64 = 60_000;

#[derive(Clone, Debug)]
pub struct TutorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl TutorConfig {
    /// Read the tutor settings from the environment.
    ///
    /// Returns `None` when no API key is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = ["SYLLABUS_AI_API_KEY", "GEMINI_API_KEY", "API_KEY"]
            .iter()
            .find_map(|name| env::var(name).ok().filter(|value| !value.trim().is_empty()))?;
        let base_url =
            env::var("SYLLABUS_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("SYLLABUS_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let timeout_ms = env::var("SYLLABUS_AI_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        Some(Self {
            base_url,
            api_key,
            model,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Gemini-backed tutor using structured JSON output.
#[derive(Clone)]
pub struct GeminiTutor {
    client: Client,
    config: Option<TutorConfig>,
}

impl GeminiTutor {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(TutorConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<TutorConfig>) -> Self {
        let client = config
            .as_ref()
            .and_then(|config| Client::builder().timeout(config.timeout).build().ok())
            .unwrap_or_default();
        Self { client, config }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Send one `generateContent` request and return the raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns `TutorError` when the tutor is disabled, the request fails,
    /// or the response carries no text.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, TutorError> {
        let config = self.config.as_ref().ok_or(TutorError::Disabled)?;

        let response = self
            .client
            .post(config.endpoint())
            .header("x-goog-api-key", &config.api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TutorError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        body.text().ok_or(TutorError::EmptyResponse)
    }
}

#[async_trait]
impl Tutor for GeminiTutor {
    async fn extract_topics(&self, document: &Document) -> Result<Vec<TopicDraft>, ExtractionError> {
        info!(name = document.name(), mime = document.mime_type(), bytes = document.len(), "extracting topics");
        let request = extraction_request(document);
        let text = self.generate(&request).await?;
        parse_topics(&text)
    }

    async fn generate_lesson(
        &self,
        topic_title: &str,
        context: &str,
    ) -> Result<TeachingSession, GenerationError> {
        info!(topic = topic_title, "generating lesson");
        let request = lesson_request(topic_title, context);
        let text = self.generate(&request).await?;
        parse_lesson(&text)
    }
}

/// Build the extraction request: the document inline, followed by the prompt.
#[must_use]
pub fn extraction_request(document: &Document) -> GenerateRequest {
    GenerateRequest {
        contents: vec![RequestContent {
            role: "user",
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: document.mime_type().to_string(),
                        data: STANDARD.encode(document.bytes()),
                    },
                },
                Part::Text {
                    text: EXTRACTION_PROMPT.to_string(),
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: topics_schema(),
            thinking_config: None,
        },
    }
}

#[must_use]
pub fn lesson_request(topic_title: &str, context: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![RequestContent {
            role: "user",
            parts: vec![Part::Text {
                text: teaching_prompt(topic_title, context),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: lesson_schema(),
            thinking_config: Some(ThinkingConfig { thinking_budget: 0 }),
        },
    }
}

/// Parse the extractor's JSON array.
///
/// # Errors
///
/// Returns `ExtractionError::Malformed` if the text is not a topic array.
pub fn parse_topics(text: &str) -> Result<Vec<TopicDraft>, ExtractionError> {
    let topics: Vec<TopicDraft> =
        serde_json::from_str(strip_fences(text)).map_err(ExtractionError::Malformed)?;
    debug!(count = topics.len(), "parsed topics");
    Ok(topics)
}

/// Parse and validate a generated lesson.
///
/// # Errors
///
/// Returns `GenerationError::Malformed` for JSON that does not match the
/// lesson shape and `GenerationError::InvalidLesson` for a lesson that fails
/// validation.
pub fn parse_lesson(text: &str) -> Result<TeachingSession, GenerationError> {
    let session: TeachingSession =
        serde_json::from_str(strip_fences(text)).map_err(GenerationError::Malformed)?;
    Ok(session.validate()?)
}

// Models sometimes wrap JSON in a markdown code fence even in JSON mode.
fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

// ─── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    fn text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}
