use std::sync::Arc;

use crate::config::Config;
use crate::intelligence::{EcosystemAnalyzer, SeedExtractor};
use crate::llm::LlmProvider;
use crate::services::{DayPlanner, RecommendationService};
use crate::taste::TasteClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: LlmProvider,
    pub taste: Option<TasteClient>,
    pub recommendations: RecommendationService,
    pub ecosystem: EcosystemAnalyzer,
    pub planner: DayPlanner,
}

impl AppState {
    pub fn new(config: Config, llm: LlmProvider, taste: Option<TasteClient>) -> Self {
        let recommendations =
            RecommendationService::new(SeedExtractor::new(llm.clone()), taste.clone());
        let ecosystem = EcosystemAnalyzer::new(llm.clone());
        let planner = DayPlanner::new(llm.clone());

        Self {
            config: Arc::new(config),
            llm,
            taste,
            recommendations,
            ecosystem,
            planner,
        }
    }
}
