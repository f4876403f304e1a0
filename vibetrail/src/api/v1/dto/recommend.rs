//! Recommendation request/response DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::intelligence::types::{Seed, VibeContext};
use crate::services::recommendations::{CategorizedEntities, RecommendationSet};

/// Request body for `POST /v1/recommendations`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Free-text description of the day the user wants.
    pub vibe: String,
    /// City used as the location filter for place recommendations.
    pub city: String,
}

/// Response body for `POST /v1/recommendations`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    /// The taste seeds extracted from the vibe.
    pub seeds: Vec<Seed>,
    /// Advisory vibe attributes, when the model derived any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe_context: Option<VibeContext>,
    /// Per-category recommendations, post-filter.
    pub recommendations: CategorizedEntities,
}

impl From<RecommendationSet> for RecommendResponse {
    fn from(set: RecommendationSet) -> Self {
        Self {
            seeds: set.seeds,
            vibe_context: set.vibe_context,
            recommendations: set.recommendations,
        }
    }
}
