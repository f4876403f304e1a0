use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::v1::dto::{RecommendRequest, RecommendResponse};
use crate::api::v1::response::{ApiResponse, ErrorCode};

/// `POST /api/v1/recommendations`
///
/// Turns a free-text vibe and a city into categorized recommendations.
/// Seed extraction failures fail the whole request; individual category
/// fetch failures degrade that category to an empty list.
#[utoipa::path(
    post,
    path = "/api/v1/recommendations",
    tag = "recommendations",
    request_body = RecommendRequest,
    responses(
        (status = 200, description = "Categorized recommendations", body = RecommendResponse),
        (status = 400, description = "Missing or blank vibe/city"),
        (status = 500, description = "Recommendation backend not configured"),
        (status = 502, description = "Seed extraction failed"),
        (status = 503, description = "LLM not configured"),
    )
)]
pub async fn recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> ApiResponse<RecommendResponse> {
    let vibe = req.vibe.trim();
    let city = req.city.trim();

    if vibe.is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "vibe is required");
    }
    if city.is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "city is required");
    }

    match state.recommendations.recommend(vibe, city).await {
        Ok(set) => ApiResponse::success(RecommendResponse::from(set)),
        Err(e) => e.into(),
    }
}
