use serde::{Deserialize, Serialize};

/// A search seed extracted from the user's vibe.
///
/// Immutable once produced; consumed by the recommendation fetcher as query
/// signals.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    /// Short phrase a recommendation engine can search for.
    pub text: String,
    #[serde(default)]
    pub category: SeedCategory,
    /// How strongly the vibe implies this seed (0.0-1.0, clamped on parse).
    #[serde(default)]
    pub confidence: f32,
    /// Related terms fed to the graph service as interest signals.
    #[serde(default)]
    pub search_terms: Vec<String>,
}

/// Coarse seed classification. Unknown values from the model collapse to
/// `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeedCategory {
    Food,
    Activity,
    Media,
    #[serde(other)]
    General,
}

impl Default for SeedCategory {
    fn default() -> Self {
        Self::General
    }
}

/// Advisory attributes derived from the vibe. Nothing downstream enforces
/// these; they are carried through for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VibeContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indoor_outdoor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
}

/// Result of seed extraction: the seeds plus the optional advisory context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedExtraction {
    pub seeds: Vec<Seed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe_context: Option<VibeContext>,
}

/// A cross-entity relationship, either supplied by the caller or produced by
/// the ecosystem analyzer. Display-only.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from_entity: String,
    pub to_entity: String,
    #[serde(default)]
    pub connection_strength: f32,
    #[serde(default)]
    pub connection_reason: String,
    #[serde(default)]
    pub shared_themes: Vec<String>,
}

/// A cross-domain theme surfaced by the ecosystem analyzer.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub supporting_entity_types: Vec<String>,
}

/// Successful ecosystem analysis. An empty analysis is a valid success and
/// is distinct from "analysis unavailable" (an error).
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemAnalysis {
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub themes: Vec<Theme>,
    #[serde(default)]
    pub cultural_insights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

/// Prior analyzer output fed back in on a later request. Every field
/// defaults, so a previous `EcosystemAnalysis` round-trips even when the
/// caller stripped fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriorInsights {
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub themes: Vec<Theme>,
    #[serde(default)]
    pub cultural_insights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}
