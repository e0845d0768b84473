//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::AppConfig;
use crate::services::ChatService;
use health_assessment_shared::AssessmentError;
use std::sync::Arc;

/// Shared application state
///
/// Cloned per request; the config sits behind an `Arc` and the chat service
/// holds its generator behind one.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Chat responder with its optional generator
    pub chat: ChatService,
}

impl AppState {
    /// Create state from configuration, building the generator client if enabled
    pub fn new(config: AppConfig) -> Result<Self, AssessmentError> {
        let chat = ChatService::from_config(&config.generator)?;
        Ok(Self::with_chat(config, chat))
    }

    /// Create state with an explicit chat service
    pub fn with_chat(config: AppConfig, chat: ChatService) -> Self {
        Self {
            config: Arc::new(config),
            chat,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the chat service
    #[inline]
    pub fn chat(&self) -> &ChatService {
        &self.chat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_local_only() {
        let state = AppState::new(AppConfig::default()).unwrap();
        assert!(!state.chat().has_generator());
        let _cloned = state.clone();
    }
}
