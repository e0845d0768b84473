//! External text generator client
//!
//! The generator is an optional first-choice responder for chat. Anything it
//! returns is checked by [`crate::services::ChatService`] before use.

use async_trait::async_trait;
use health_assessment_shared::AssessmentError;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::config::GeneratorConfig;

/// Text-in/text-out collaborator
///
/// `Ok(None)` means the service answered but produced no text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, AssessmentError>;
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
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
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// HTTP client for the Gemini `generateContent` API
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: SecretString,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Create a client for `{base_url}/models/{model}:generateContent`
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, AssessmentError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AssessmentError::External(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/models/{}:generateContent",
                base_url.trim_end_matches('/'),
                model
            ),
            api_key,
            timeout_secs: timeout.as_secs(),
        })
    }

    /// Build from configuration; `None` when disabled or missing a key
    pub fn from_config(config: &GeneratorConfig) -> Result<Option<Self>, AssessmentError> {
        match (&config.api_key, config.enabled) {
            (Some(key), true) => Self::new(
                &config.api_url,
                &config.model,
                SecretString::new(key.expose_secret().clone()),
                config.timeout(),
            )
            .map(Some),
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, AssessmentError> {
        debug!(prompt_chars = prompt.len(), "Calling text generator");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.expose_secret().as_str())])
            .json(&json!({ "contents": [{ "parts": [{ "text": prompt }] }] }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AssessmentError::Timeout(self.timeout_secs)
                } else {
                    AssessmentError::External(format!("Failed to reach generator: {}", e))
                }
            })?;

        if !response.status().is_success() {
            return Err(AssessmentError::External(format!(
                "Generator API error: {}",
                response.status()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AssessmentError::External(format!("Failed to parse response: {}", e)))?;

        Ok(body.first_text())
    }
}
