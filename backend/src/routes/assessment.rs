//! Assessment API routes

use crate::error::ApiResult;
use crate::services::AssessmentService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use health_assessment_shared::{AssessmentReport, ProfileInput};

/// Create assessment routes
pub fn assessment_routes() -> Router<AppState> {
    Router::new().route("/assessment", post(create_assessment))
}

/// POST /api/v1/assessment - Validate the form and compute the report
async fn create_assessment(Json(input): Json<ProfileInput>) -> ApiResult<Json<AssessmentReport>> {
    let report = AssessmentService::assess(&input)?;
    Ok(Json(report))
}
