//! API request and response types

use crate::advice::AdviceDocument;
use crate::classifier::AdviceCategory;
use crate::validation::{ProfileInput, ValidationError};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// One failing form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for FieldError {
    fn from(err: &ValidationError) -> Self {
        Self {
            field: err.field.clone(),
            message: err.message.clone(),
        }
    }
}

// ============================================================================
// Chat Types
// ============================================================================

/// Who said a chat line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One earlier line of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub profile: ProfileInput,
    pub query: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// Where a chat reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Generated,
    Local,
}

/// Chat reply
///
/// Local replies carry the category and structured document alongside the
/// plain-text rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub source: ReplySource,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AdviceCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<AdviceDocument>,
}

impl ChatResponse {
    pub fn generated(text: String) -> Self {
        Self {
            source: ReplySource::Generated,
            text,
            category: None,
            document: None,
        }
    }

    pub fn local(document: AdviceDocument) -> Self {
        Self {
            source: ReplySource::Local,
            text: document.to_string(),
            category: Some(document.category),
            document: Some(document),
        }
    }
}

/// Chat greeting response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::render_advice;
    use crate::profile::sample_profile;

    #[test]
    fn test_chat_request_history_defaults_to_empty() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"profile": {"name": "Asha"}, "query": "hi"}"#).unwrap();
        assert!(req.history.is_empty());
        assert_eq!(req.profile.name, "Asha");
    }

    #[test]
    fn test_local_response_carries_category() {
        let doc = render_advice(AdviceCategory::Skin, "rash", &sample_profile());
        let resp = ChatResponse::local(doc);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["source"], "local");
        assert_eq!(json["category"], "skin");
        assert!(json["text"].as_str().unwrap().starts_with("Skin Redness & Itching Analysis"));
    }

    #[test]
    fn test_generated_response_omits_document() {
        let json = serde_json::to_value(ChatResponse::generated("Hi".into())).unwrap();
        assert_eq!(json["source"], "generated");
        assert!(json.get("category").is_none());
        assert!(json.get("document").is_none());
    }
}
