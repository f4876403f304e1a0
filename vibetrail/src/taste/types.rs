//! Wire types for the cultural-recommendation graph service.

use serde::{Deserialize, Serialize};

/// An entity returned by the recommendation graph service.
///
/// These are opaque records: the service constructs them, vibetrail only
/// filters and displays them. Everything beyond the name is optional.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Affinity score reported by the graph service, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taste_strength: Option<f32>,
}

/// The fixed set of recommendation categories fetched for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Food,
    Activities,
    Movies,
    TvShows,
    Music,
    Books,
}

/// Query shape for one category: entity-type filter, tag filters, and the
/// result-count limit requested from the service.
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    pub entity_type: &'static str,
    pub tags: &'static [&'static str],
    pub limit: usize,
}

impl EntityCategory {
    pub const ALL: [EntityCategory; 6] = [
        EntityCategory::Food,
        EntityCategory::Activities,
        EntityCategory::Movies,
        EntityCategory::TvShows,
        EntityCategory::Music,
        EntityCategory::Books,
    ];

    pub fn spec(&self) -> CategorySpec {
        match self {
            // Food is over-fetched relative to its display count of 8 so the
            // denylist filter has slack to work with.
            EntityCategory::Food => CategorySpec {
                entity_type: "urn:entity:place",
                tags: &[
                    "urn:tag:category:place:restaurant",
                    "urn:tag:category:place:cafe",
                ],
                limit: 12,
            },
            EntityCategory::Activities => CategorySpec {
                entity_type: "urn:entity:place",
                tags: &["urn:tag:category:place:attraction"],
                limit: 8,
            },
            EntityCategory::Movies => CategorySpec {
                entity_type: "urn:entity:movie",
                tags: &[],
                limit: 6,
            },
            EntityCategory::TvShows => CategorySpec {
                entity_type: "urn:entity:tv_show",
                tags: &[],
                limit: 6,
            },
            EntityCategory::Music => CategorySpec {
                entity_type: "urn:entity:artist",
                tags: &[],
                limit: 6,
            },
            EntityCategory::Books => CategorySpec {
                entity_type: "urn:entity:book",
                tags: &[],
                limit: 6,
            },
        }
    }

    /// Only place-typed categories take a location filter.
    pub fn is_location_bound(&self) -> bool {
        matches!(self, EntityCategory::Food | EntityCategory::Activities)
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityCategory::Food => write!(f, "food"),
            EntityCategory::Activities => write!(f, "activities"),
            EntityCategory::Movies => write!(f, "movies"),
            EntityCategory::TvShows => write!(f, "tv_shows"),
            EntityCategory::Music => write!(f, "music"),
            EntityCategory::Books => write!(f, "books"),
        }
    }
}

/// Top-level reply envelope from the graph service.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InsightsResponse {
    #[serde(default)]
    pub results: InsightsResults,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct InsightsResults {
    #[serde(default)]
    pub entities: Vec<RecommendationEntity>,
}
