use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::v1::dto::{PlanRequest, PlanResponse};
use crate::api::v1::response::{ApiResponse, ErrorCode};

/// `POST /api/v1/plan`
///
/// Schedules the user's selected items into a day plan. An unusable model
/// reply or a transport failure produces the deterministic fallback schedule,
/// marked by `plannedBy`; missing LLM configuration is an error instead.
#[utoipa::path(
    post,
    path = "/api/v1/plan",
    tag = "plan",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Time-ordered day plan", body = PlanResponse),
        (status = 400, description = "No items selected"),
        (status = 500, description = "LLM credential missing"),
        (status = 503, description = "LLM not configured"),
    )
)]
pub async fn plan_day(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> ApiResponse<PlanResponse> {
    if req.selected_items.is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "selectedItems must not be empty");
    }
    if req.selected_items.iter().any(|item| item.name.trim().is_empty()) {
        return ApiResponse::error(
            ErrorCode::InvalidRequest,
            "every selected item needs a name",
        );
    }

    match state
        .planner
        .plan(&req.selected_items, req.city.as_deref(), req.preferences.as_deref())
        .await
    {
        Ok(plan) => ApiResponse::success(PlanResponse::from(plan)),
        Err(e) => e.into(),
    }
}
