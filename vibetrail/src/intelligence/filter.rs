//! Denylist filter for the food category.
//!
//! The graph service's place lookups occasionally surface retail and fuel
//! businesses. This is a substring denylist, not a semantic classifier;
//! false positives and negatives are accepted.

use crate::taste::RecommendationEntity;

/// Name substrings (lowercase) that disqualify a food-category entity.
const FOOD_DENYLIST: &[&str] = &[
    "walmart",
    "target",
    "supercenter",
    "grocery",
    "costco",
    "sam's club",
    "shell",
    "chevron",
    "exxon",
    "bp",
    "gas",
    "fuel",
    "convenience",
];

/// Maximum food entities kept for display.
pub const FOOD_DISPLAY_LIMIT: usize = 8;

/// Drop denylisted food entities, then truncate to the display limit.
pub fn filter_food_entities(entities: Vec<RecommendationEntity>) -> Vec<RecommendationEntity> {
    entities
        .into_iter()
        .filter(|entity| !is_denylisted(&entity.name))
        .take(FOOD_DISPLAY_LIMIT)
        .collect()
}

fn is_denylisted(name: &str) -> bool {
    let lowered = name.to_lowercase();
    FOOD_DENYLIST
        .iter()
        .any(|blocked| lowered.contains(blocked))
}
