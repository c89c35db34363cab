//! Text-completion service client
//!
//! The assistant treats the generative model as an opaque
//! `complete(prompt) -> text` service behind a trait, so the handler can
//! run against a stub in tests and against a Gemini-style REST endpoint in
//! production. The client applies a caller-configured request timeout and
//! does not retry.

use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Opaque text-completion service
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Complete a prompt into a single text response.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Configuration for the generative-language client
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl CompletionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-1.5-flash-latest".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Read the configuration from the environment (`GOOGLE_API_KEY`,
    /// optionally `EDI_ASSIST_MODEL` and `EDI_ASSIST_ENDPOINT`).
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no API key is set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| Error::Configuration {
            details: "GOOGLE_API_KEY is not set".to_string(),
        })?;

        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("EDI_ASSIST_MODEL") {
            config.model = model;
        }
        if let Ok(endpoint) = std::env::var("EDI_ASSIST_ENDPOINT") {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

/// Client for a Gemini-style generative-language REST endpoint
pub struct GenerativeClient {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl GenerativeClient {
    /// Create a client with the request timeout from the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the HTTP client cannot be built.
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Configuration {
                details: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CompletionService for GenerativeClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        );
        debug!(model = %self.config.model, prompt_len = prompt.len(), "sending completion request");

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|source| Error::Http {
                context: "generateContent request".to_string(),
                source,
            })?;

        let response = response.error_for_status().map_err(|source| Error::Http {
            context: "generateContent status".to_string(),
            source,
        })?;

        let parsed: GenerateResponse = response.json().await.map_err(|source| Error::Http {
            context: "generateContent body".to_string(),
            source,
        })?;

        let Some(candidate) = parsed.candidates.into_iter().next() else {
            return Err(Error::Completion {
                details: "response contained no candidates".to_string(),
            });
        };

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(Error::Completion {
                details: "response blocked for safety".to_string(),
            });
        }

        let text = candidate
            .content
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(Error::Completion {
                details: "response contained no text parts".to_string(),
            });
        }

        Ok(text)
    }
}
