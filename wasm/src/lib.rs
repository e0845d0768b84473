//! Health Assessment WASM Module
//!
//! WebAssembly bindings so the browser form can run the metrics engine and
//! the local chat advisor without a server. Everything crosses the boundary
//! as JSON strings; failures come back as an `{"error": ...}` body with the
//! same shape the HTTP API uses.

use health_assessment_shared::prompt::greeting;
use health_assessment_shared::types::{ChatResponse, ErrorDetail, ErrorResponse, FieldError};
use health_assessment_shared::{
    assess, classify, health_metrics, render_advice, validate_profile, Profile, ProfileInput,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn error_json(code: &str, message: String, fields: Vec<FieldError>) -> String {
    let body = ErrorResponse {
        error: ErrorDetail {
            code: code.to_string(),
            message,
            fields,
        },
    };
    serde_json::to_string(&body).unwrap_or_else(|_| format!(r#"{{"error":{{"code":"{}"}}}}"#, code))
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| error_json("SERIALIZATION_ERROR", e.to_string(), Vec::new()))
}

/// Parse and validate a profile form, or produce the error body
fn parse_profile(profile_json: &str) -> Result<Profile, String> {
    let input: ProfileInput = serde_json::from_str(profile_json)
        .map_err(|e| error_json("BAD_REQUEST", format!("Invalid profile JSON: {}", e), Vec::new()))?;

    validate_profile(&input).map_err(|errors| {
        error_json(
            "VALIDATION_ERROR",
            "One or more fields are invalid".to_string(),
            errors.iter().map(FieldError::from).collect(),
        )
    })
}

/// Full assessment report for a profile form
#[wasm_bindgen]
pub fn assess_profile(profile_json: &str) -> String {
    match parse_profile(profile_json) {
        Ok(profile) => to_json(&assess(&profile)),
        Err(body) => body,
    }
}

/// Advice category for a chat query
#[wasm_bindgen]
pub fn classify_query(query: &str) -> String {
    classify(query).to_string()
}

/// Answer a chat query with the local classifier
#[wasm_bindgen]
pub fn chat_reply_local(profile_json: &str, query: &str) -> String {
    if query.trim().is_empty() {
        return error_json("BAD_REQUEST", "Query must not be empty".to_string(), Vec::new());
    }
    match parse_profile(profile_json) {
        Ok(profile) => to_json(&ChatResponse::local(render_advice(
            classify(query),
            query,
            &profile,
        ))),
        Err(body) => body,
    }
}

/// Opening chat message for a profile form
#[wasm_bindgen]
pub fn chat_greeting(profile_json: &str) -> String {
    match parse_profile(profile_json) {
        Ok(profile) => greeting(&profile),
        Err(body) => body,
    }
}

/// Calculate BMI from weight (kg) and height (cm), for live form feedback
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    health_metrics::calculate_bmi(weight_kg, height_cm)
}
