//! Chat service - generator first, local classifier as fallback

use crate::config::GeneratorConfig;
use crate::services::generator::{GeminiClient, TextGenerator};
use health_assessment_shared::prompt::{build_prompt, REFUSAL_MARKER};
use health_assessment_shared::types::{ChatResponse, ChatTurn};
use health_assessment_shared::{classify, render_advice, AssessmentError, Profile};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

/// Answers chat queries
///
/// With a generator configured, every query is first sent to it. Any error,
/// timeout, empty text or refusal falls back to the local classifier within
/// the same call. There are no retries.
#[derive(Clone)]
pub struct ChatService {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
}

impl ChatService {
    /// Local classifier only
    pub fn local_only() -> Self {
        Self {
            generator: None,
            timeout: Duration::ZERO,
        }
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self {
            generator: Some(generator),
            timeout,
        }
    }

    /// Build from configuration, using the Gemini client when usable
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, AssessmentError> {
        if config.enabled && config.api_key.is_none() {
            warn!("Generator enabled without an API key; chat will use local advice only");
        }
        Ok(match GeminiClient::from_config(config)? {
            Some(client) => Self::with_generator(Arc::new(client), config.timeout()),
            None => Self::local_only(),
        })
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Reply to one query; never fails
    pub async fn reply(&self, profile: &Profile, query: &str, history: &[ChatTurn]) -> ChatResponse {
        if let Some(generator) = &self.generator {
            match self.generate(generator.as_ref(), profile, query, history).await {
                Ok(text) => {
                    info!(chars = text.len(), "Chat answered by generator");
                    return ChatResponse::generated(text);
                }
                Err(e) => warn!(reason = %e, "Generator unavailable, falling back to local advice"),
            }
        }
        Self::local_reply(profile, query)
    }

    /// Classify and render locally
    pub fn local_reply(profile: &Profile, query: &str) -> ChatResponse {
        let category = classify(query);
        info!(%category, query_chars = query.len(), "Chat answered locally");
        ChatResponse::local(render_advice(category, query, profile))
    }

    async fn generate(
        &self,
        generator: &dyn TextGenerator,
        profile: &Profile,
        query: &str,
        history: &[ChatTurn],
    ) -> Result<String, AssessmentError> {
        let prompt = build_prompt(profile, query, history);

        let text = timeout(self.timeout, generator.generate(&prompt))
            .await
            .map_err(|_| AssessmentError::Timeout(self.timeout.as_secs()))??
            .ok_or(AssessmentError::EmptyResponse)?;

        if text.trim().is_empty() {
            return Err(AssessmentError::EmptyResponse);
        }
        if text.contains(REFUSAL_MARKER) {
            return Err(AssessmentError::Refused);
        }
        Ok(text)
    }
}
