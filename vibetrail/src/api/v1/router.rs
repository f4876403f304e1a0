use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
        .route("/recommendations", post(handlers::recommend::recommend))
        .route("/ecosystem", post(handlers::ecosystem::analyze_ecosystem))
        .route("/plan", post(handlers::plan::plan_day))
}
