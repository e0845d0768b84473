//! Health Assessment Shared Library
//!
//! The pure engines behind the assessment form and the chat assistant:
//! profile validation, the health metrics engine, recommendations and the
//! keyword symptom classifier. Used by the backend and the WASM module.

pub mod advice;
pub mod classifier;
pub mod errors;
pub mod health_metrics;
pub mod insights;
pub mod profile;
pub mod prompt;
pub mod recommendations;
pub mod report;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use advice::{render_advice, AdviceDocument, AdviceSection};
pub use classifier::{classify, AdviceCategory};
pub use errors::*;
pub use health_metrics::{compute_metrics, BmiCategory, Metrics};
pub use profile::{ActivityLevel, FoodTag, Gender, Profile};
pub use report::{assess, AssessmentReport};
pub use types::*;
pub use validation::{validate_profile, ProfileInput, ValidationError};
