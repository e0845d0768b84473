//! Business logic services
//!
//! Services sit between the HTTP routes and the shared engines, and own the
//! external text generator.

pub mod assessment;
pub mod chat;
pub mod generator;

pub use assessment::AssessmentService;
pub use chat::ChatService;
pub use generator::{GeminiClient, TextGenerator};
