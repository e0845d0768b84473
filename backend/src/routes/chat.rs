//! Chat API routes

use crate::error::{ApiError, ApiResult};
use crate::services::AssessmentService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use health_assessment_shared::prompt::greeting;
use health_assessment_shared::types::{ChatRequest, ChatResponse, GreetingResponse};
use health_assessment_shared::ProfileInput;

/// Create chat routes
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat))
        .route("/chat/greeting", post(chat_greeting))
}

/// POST /api/v1/chat - Answer one query about the submitted profile
async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    if req.query.trim().is_empty() {
        return Err(ApiError::BadRequest("Query must not be empty".to_string()));
    }
    let profile = AssessmentService::profile_from_input(&req.profile)?;
    let response = state.chat().reply(&profile, &req.query, &req.history).await;
    Ok(Json(response))
}

/// POST /api/v1/chat/greeting - Opening message for the chat window
async fn chat_greeting(Json(input): Json<ProfileInput>) -> ApiResult<Json<GreetingResponse>> {
    let profile = AssessmentService::profile_from_input(&input)?;
    Ok(Json(GreetingResponse {
        message: greeting(&profile),
    }))
}
