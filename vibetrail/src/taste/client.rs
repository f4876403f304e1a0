use std::time::Duration;

use crate::config::TasteConfig;
use crate::error::{Result, VibeError};
use crate::taste::types::{EntityCategory, InsightsResponse, RecommendationEntity};

/// Client for the cultural-recommendation graph service.
///
/// One GET per category against `/v2/insights`, authenticated with an
/// `X-Api-Key` header. Failures surface as `Err`; degrading a failed category
/// to an empty list is the caller's decision, not the client's.
#[derive(Debug, Clone)]
pub struct TasteClient {
    client: reqwest::Client,
    base_url: String,
}

impl TasteClient {
    pub fn new(config: &TasteConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut api_key = reqwest::header::HeaderValue::from_str(&config.api_key)
            .map_err(|_| VibeError::Configuration("TASTE_API_KEY is not valid ASCII".to_string()))?;
        api_key.set_sensitive(true);
        headers.insert("X-Api-Key", api_key);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|error| {
                VibeError::Taste(format!("Failed to create taste HTTP client: {error}"))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one category of recommendations.
    ///
    /// The query combines the category's entity-type filter, a location
    /// filter (place-typed categories only), the category's tag filters, and
    /// one interest-signal parameter per seed search term.
    pub async fn fetch_category(
        &self,
        category: EntityCategory,
        interest_terms: &[String],
        city: &str,
    ) -> Result<Vec<RecommendationEntity>> {
        let spec = category.spec();
        let url = format!("{}/v2/insights", self.base_url);

        let mut request = self
            .client
            .get(&url)
            .query(&[("filter.type", spec.entity_type)])
            .query(&[("take", spec.limit.to_string())]);

        if category.is_location_bound() {
            request = request.query(&[("filter.location.query", city)]);
        }

        for tag in spec.tags {
            request = request.query(&[("filter.tags", *tag)]);
        }

        for term in interest_terms {
            request = request.query(&[("signal.interests.query", term.as_str())]);
        }

        let response = request.send().await.map_err(|error| {
            VibeError::Taste(format!("Taste request for {category} failed: {error}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VibeError::Taste(format!(
                "Taste API returned {status} for {category}"
            )));
        }

        let body: InsightsResponse = response.json().await.map_err(|error| {
            VibeError::Taste(format!("Invalid taste reply for {category}: {error}"))
        })?;

        tracing::debug!(
            category = %category,
            count = body.results.entities.len(),
            "Fetched recommendation category"
        );

        Ok(body.results.entities)
    }
}
