use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VibeError};
use crate::intelligence::filter;
use crate::intelligence::types::{Seed, VibeContext};
use crate::intelligence::SeedExtractor;
use crate::taste::{EntityCategory, RecommendationEntity, TasteClient};

/// Per-category recommendation lists, post-filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedEntities {
    pub food: Vec<RecommendationEntity>,
    pub activities: Vec<RecommendationEntity>,
    pub movies: Vec<RecommendationEntity>,
    pub tv_shows: Vec<RecommendationEntity>,
    pub music: Vec<RecommendationEntity>,
    pub books: Vec<RecommendationEntity>,
}

impl CategorizedEntities {
    fn set(&mut self, category: EntityCategory, entities: Vec<RecommendationEntity>) {
        match category {
            EntityCategory::Food => self.food = entities,
            EntityCategory::Activities => self.activities = entities,
            EntityCategory::Movies => self.movies = entities,
            EntityCategory::TvShows => self.tv_shows = entities,
            EntityCategory::Music => self.music = entities,
            EntityCategory::Books => self.books = entities,
        }
    }
}

/// The base recommendation set for one vibe+city request.
#[derive(Debug, Clone)]
pub struct RecommendationSet {
    pub seeds: Vec<Seed>,
    pub vibe_context: Option<VibeContext>,
    pub recommendations: CategorizedEntities,
}

/// Orchestrates seed extraction, the six-way category fan-out, and the food
/// filter. Request-scoped: nothing is cached or persisted across calls.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    seeds: SeedExtractor,
    taste: Option<TasteClient>,
}

impl RecommendationService {
    pub fn new(seeds: SeedExtractor, taste: Option<TasteClient>) -> Self {
        Self { seeds, taste }
    }

    pub async fn recommend(&self, vibe: &str, city: &str) -> Result<RecommendationSet> {
        let taste = self.taste.as_ref().ok_or_else(|| {
            VibeError::Configuration("TASTE_API_KEY is not set".to_string())
        })?;

        // Stage one has no partial-success path: a bad seed reply fails the
        // whole request.
        let extraction = self.seeds.extract(vibe, city).await?;
        let terms = interest_terms(&extraction.seeds);

        // Categories are independent: fetch all six concurrently and degrade
        // each failure to an empty list without touching its siblings.
        let fetches = EntityCategory::ALL.map(|category| {
            let terms = &terms;
            async move { (category, taste.fetch_category(category, terms, city).await) }
        });

        let mut recommendations = CategorizedEntities::default();
        for (category, result) in join_all(fetches).await {
            let entities = match result {
                Ok(entities) => entities,
                Err(error) => {
                    tracing::warn!(category = %category, error = %error, "Category fetch degraded to empty");
                    Vec::new()
                }
            };
            recommendations.set(category, entities);
        }

        recommendations.food = filter::filter_food_entities(recommendations.food);

        Ok(RecommendationSet {
            seeds: extraction.seeds,
            vibe_context: extraction.vibe_context,
            recommendations,
        })
    }
}

/// Flatten seed search terms into the interest-signal list, falling back to
/// the seed's own text when it carries no terms, deduplicated
/// case-insensitively in first-seen order.
fn interest_terms(seeds: &[Seed]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut terms = Vec::new();

    let candidates = seeds.iter().flat_map(|seed| {
        if seed.search_terms.is_empty() {
            vec![seed.text.clone()]
        } else {
            seed.search_terms.clone()
        }
    });

    for candidate in candidates {
        let normalized = candidate.trim().to_lowercase();
        if normalized.is_empty() || seen.contains(&normalized) {
            continue;
        }
        seen.push(normalized);
        terms.push(candidate.trim().to_string());
    }

    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::types::SeedCategory;

    fn seed(text: &str, terms: &[&str]) -> Seed {
        Seed {
            text: text.to_string(),
            category: SeedCategory::General,
            confidence: 0.8,
            search_terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_interest_terms_flattens_search_terms() {
        let seeds = vec![
            seed("cozy jazz bars", &["jazz club", "live music bar"]),
            seed("french bistro", &["bistro"]),
        ];
        assert_eq!(
            interest_terms(&seeds),
            vec!["jazz club", "live music bar", "bistro"]
        );
    }

    #[test]
    fn test_interest_terms_falls_back_to_seed_text() {
        let seeds = vec![seed("old bookstores", &[])];
        assert_eq!(interest_terms(&seeds), vec!["old bookstores"]);
    }

    #[test]
    fn test_interest_terms_deduplicates_case_insensitively() {
        let seeds = vec![
            seed("a", &["Jazz Club", "wine bar"]),
            seed("b", &["jazz club"]),
        ];
        assert_eq!(interest_terms(&seeds), vec!["Jazz Club", "wine bar"]);
    }

    #[test]
    fn test_interest_terms_skips_blank_entries() {
        let seeds = vec![seed("a", &["  ", "vinyl shops"])];
        assert_eq!(interest_terms(&seeds), vec!["vinyl shops"]);
    }

    #[tokio::test]
    async fn test_recommend_without_taste_config_is_a_configuration_error() {
        let service = RecommendationService::new(
            SeedExtractor::new(crate::llm::LlmProvider::unavailable("test")),
            None,
        );
        let result = service.recommend("rainy day jazz", "Chicago").await;
        assert!(matches!(result, Err(VibeError::Configuration(_))));
    }
}
