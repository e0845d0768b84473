//! Error types for the health assessment engines

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors raised around the engines
///
/// The engines themselves are total over a validated profile; these errors
/// come from the input layer and from the optional text generator.
#[derive(Error, Debug)]
pub enum AssessmentError {
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("External service error: {0}")]
    External(String),

    #[error("External service timed out after {0}s")]
    Timeout(u64),

    #[error("External service returned an empty response")]
    EmptyResponse,

    #[error("External service declined to answer")]
    Refused,
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.user_message())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for AssessmentError {
    fn from(errors: Vec<ValidationError>) -> Self {
        AssessmentError::Validation(errors)
    }
}
