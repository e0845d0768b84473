//! Health check endpoints
//!
//! - /health - basic check
//! - /health/ready - readiness, reporting how chat will be answered
//! - /health/live - liveness, OK while the process runs
//!
//! Nothing here can fail: the generator is optional and there is no store.

use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

impl HealthResponse {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now(),
            checks: None,
        }
    }
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub generator: GeneratorCheck,
}

/// Which path answers chat queries
#[derive(Serialize)]
pub struct GeneratorCheck {
    /// `enabled` or `disabled`
    pub status: &'static str,
    pub detail: String,
}

impl GeneratorCheck {
    fn for_state(state: &AppState) -> Self {
        if state.chat().has_generator() {
            Self {
                status: "enabled",
                detail: format!(
                    "{} with local fallback after {}s",
                    state.config().generator.model,
                    state.config().generator.timeout_secs
                ),
            }
        } else {
            Self {
                status: "disabled",
                detail: "Chat answers from local advice only".to_string(),
            }
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

pub async fn readiness_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        checks: Some(HealthChecks {
            generator: GeneratorCheck::for_state(&state),
        }),
        ..HealthResponse::new("ready")
    })
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive"))
}
