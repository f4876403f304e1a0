//! Ecosystem-analysis request/response DTOs for the v1 API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::intelligence::types::{Connection, EcosystemAnalysis, PriorInsights, Theme};
use crate::intelligence::EcosystemInput;
use crate::taste::RecommendationEntity;

/// Request body for `POST /v1/ecosystem`.
///
/// Everything except `vibe` and `city` is optional; the analyzer defaults
/// absent fields rather than rejecting them, so a previous response can be
/// fed straight back in.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemRequest {
    pub vibe: String,
    pub city: String,
    /// Category name -> entities to analyze.
    #[serde(default)]
    pub entities: BTreeMap<String, Vec<RecommendationEntity>>,
    /// Connections already known to the caller.
    #[serde(default)]
    pub connections: Vec<Connection>,
    /// Themes already known to the caller.
    #[serde(default)]
    pub themes: Vec<Theme>,
    /// Output of a previous analysis pass, if any.
    #[serde(default)]
    pub cultural_insights: Option<PriorInsights>,
}

impl From<EcosystemRequest> for EcosystemInput {
    fn from(req: EcosystemRequest) -> Self {
        Self {
            vibe: req.vibe,
            city: req.city,
            entities: req.entities,
            connections: req.connections,
            themes: req.themes,
            prior_insights: req.cultural_insights,
        }
    }
}

/// Response body for `POST /v1/ecosystem`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemResponse {
    #[serde(flatten)]
    pub analysis: EcosystemAnalysis,
}
