mod classify;
#[cfg(test)]
mod test_support;
mod translate;

use std::env;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

pub use classify::{CategoryClassifier, Classification, ClassificationSource};
pub use translate::{ResolvedResponse, ResponseResolver};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-latest";
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// One bounded text-generation request.
#[derive(Debug, Clone)]
pub struct TextRequest {
    pub prompt: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// The external text-generation capability the core depends on abstractly.
/// Production uses [`Generator`]; tests substitute deterministic stubs.
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: TextRequest) -> Result<String, GeneratorError>;
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("text generation is disabled: no API key configured")]
    Disabled,
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("generation response contained no text")]
    EmptyOutput,
}

/// Gemini `generateContent` over HTTPS.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(6))
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: TextRequest) -> Result<String, GeneratorError> {
        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);
        let payload = serde_json::json!({
            "contents": [
                { "parts": [ { "text": request.prompt } ] }
            ],
            "generationConfig": {
                "temperature": request.temperature,
                "maxOutputTokens": request.max_output_tokens
            }
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response.json().await?;
        extract_candidate_text(&body).ok_or(GeneratorError::EmptyOutput)
    }
}

/// Pull the generated text out of a `generateContent` response, joining
/// multi-part candidates.
fn extract_candidate_text(payload: &serde_json::Value) -> Option<String> {
    let parts = payload
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let chunks: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|text| text.as_str()))
        .collect();

    let joined = chunks.join("");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The generator a process actually runs with: Gemini when a key is
/// configured, otherwise disabled so every call errors into the documented
/// fallback paths.
#[derive(Debug, Clone)]
pub enum Generator {
    Gemini(GeminiGenerator),
    Disabled,
}

impl Generator {
    /// Wire up from `GEMINI_API_KEY` / `RPLUS_GEMINI_MODEL`.
    pub fn from_env() -> Self {
        let Some(api_key) = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
        else {
            warn!("GEMINI_API_KEY not set, text generation disabled");
            return Self::Disabled;
        };

        let model =
            env::var("RPLUS_GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        match GeminiGenerator::new(api_key, model) {
            Ok(gemini) => Self::Gemini(gemini),
            Err(error) => {
                warn!(%error, "failed building Gemini client, text generation disabled");
                Self::Disabled
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Gemini(_))
    }
}

impl TextGenerator for Generator {
    async fn generate(&self, request: TextRequest) -> Result<String, GeneratorError> {
        match self {
            Self::Gemini(gemini) => gemini.generate(request).await,
            Self::Disabled => Err(GeneratorError::Disabled),
        }
    }
}
