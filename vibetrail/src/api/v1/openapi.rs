use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;
use crate::intelligence::types;
use crate::services::planner;
use crate::services::recommendations;
use crate::taste;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VibeTrail API",
        version = "1.0.0",
        description = "Taste-to-itinerary service. Turns a free-text vibe into \
                       categorized cultural recommendations and a scheduled day plan.",
    ),
    paths(
        handlers::health::health_check,
        handlers::recommend::recommend,
        handlers::ecosystem::analyze_ecosystem,
        handlers::plan::plan_day,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Recommendations
        dto::recommend::RecommendRequest,
        dto::recommend::RecommendResponse,
        recommendations::CategorizedEntities,
        taste::types::RecommendationEntity,
        types::Seed,
        types::SeedCategory,
        types::VibeContext,
        // Ecosystem
        dto::ecosystem::EcosystemRequest,
        dto::ecosystem::EcosystemResponse,
        types::Connection,
        types::Theme,
        types::EcosystemAnalysis,
        types::PriorInsights,
        // Plan
        dto::plan::PlanRequest,
        dto::plan::PlanResponse,
        planner::SelectedItem,
        planner::DayPlanEntry,
        planner::PlannedItem,
        planner::PlanPeriod,
        planner::PlannedBy,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::LlmStatus,
        handlers::health::TasteStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "recommendations", description = "Vibe-to-recommendations pipeline"),
        (name = "ecosystem", description = "Cultural ecosystem analysis"),
        (name = "plan", description = "Day-plan scheduling"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
