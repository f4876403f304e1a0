use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::v1::dto::{EcosystemRequest, EcosystemResponse};
use crate::api::v1::response::{ApiResponse, ErrorCode};
use crate::intelligence::EcosystemInput;

/// `POST /api/v1/ecosystem`
///
/// Runs the cultural ecosystem analysis over a recommendation set. Unlike the
/// day planner this endpoint does not fall back: an unusable model reply is a
/// 502 so the client knows the analysis is missing rather than empty.
#[utoipa::path(
    post,
    path = "/api/v1/ecosystem",
    tag = "ecosystem",
    request_body = EcosystemRequest,
    responses(
        (status = 200, description = "Ecosystem analysis", body = EcosystemResponse),
        (status = 400, description = "Missing or blank vibe/city"),
        (status = 502, description = "Analysis reply was unusable"),
        (status = 503, description = "LLM not configured"),
    )
)]
pub async fn analyze_ecosystem(
    State(state): State<AppState>,
    Json(req): Json<EcosystemRequest>,
) -> ApiResponse<EcosystemResponse> {
    if req.vibe.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "vibe is required");
    }
    if req.city.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "city is required");
    }

    let input = EcosystemInput::from(req);
    match state.ecosystem.analyze(&input).await {
        Ok(analysis) => ApiResponse::success(EcosystemResponse { analysis }),
        Err(e) => e.into(),
    }
}
