use std::collections::BTreeMap;

use crate::error::{Result, VibeError};
use crate::llm::{prompts, CompletionOptions, LlmProvider};
use crate::taste::RecommendationEntity;

use super::types::{Connection, EcosystemAnalysis, PriorInsights, Theme};

/// How many example entities per category make it into the prompt.
const MAX_ENTITIES_PER_CATEGORY: usize = 5;
/// How many known connections make it into the prompt.
const MAX_KNOWN_CONNECTIONS: usize = 10;

/// Input to the ecosystem analyzer: the recommendation set plus anything the
/// caller already knows about it.
#[derive(Debug, Clone, Default)]
pub struct EcosystemInput {
    pub vibe: String,
    pub city: String,
    /// Category name -> entities. BTreeMap keeps prompt construction
    /// deterministic across requests.
    pub entities: BTreeMap<String, Vec<RecommendationEntity>>,
    pub connections: Vec<Connection>,
    pub themes: Vec<Theme>,
    pub prior_insights: Option<PriorInsights>,
}

/// Cross-domain enrichment pass over an existing recommendation set.
///
/// A reply that fails to parse is an explicit error ("analysis unavailable"),
/// never silently collapsed into an empty analysis.
#[derive(Debug, Clone)]
pub struct EcosystemAnalyzer {
    llm: LlmProvider,
}

impl EcosystemAnalyzer {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    pub async fn analyze(&self, input: &EcosystemInput) -> Result<EcosystemAnalysis> {
        if !self.llm.is_available() {
            return Err(VibeError::LlmUnavailable(
                "Ecosystem analysis requires a configured LLM".to_string(),
            ));
        }

        let prompt = build_prompt(input);
        let options = CompletionOptions {
            temperature: Some(0.8),
            max_tokens: Some(1500),
        };

        let analysis: EcosystemAnalysis = self
            .llm
            .complete_structured(&prompt, Some(&options))
            .await?;

        tracing::debug!(
            connections = analysis.connections.len(),
            themes = analysis.themes.len(),
            "Ecosystem analysis complete"
        );

        Ok(analysis)
    }
}

/// Render the analyzer prompt. Every input field is optional in practice, so
/// each summary block defaults to a placeholder rather than erroring.
fn build_prompt(input: &EcosystemInput) -> String {
    let entity_summary = summarize_entities(&input.entities);
    let connection_summary = summarize_connections(&input.connections);
    let theme_summary = summarize_themes(&input.themes);
    let insight_summary = summarize_prior_insights(input.prior_insights.as_ref());

    prompts::ecosystem_prompt(
        &input.vibe,
        &input.city,
        &entity_summary,
        &connection_summary,
        &theme_summary,
        &insight_summary,
    )
}

fn summarize_entities(entities: &BTreeMap<String, Vec<RecommendationEntity>>) -> String {
    if entities.is_empty() {
        return "(none)".to_string();
    }

    entities
        .iter()
        .map(|(category, items)| {
            let names = items
                .iter()
                .take(MAX_ENTITIES_PER_CATEGORY)
                .map(|entity| match &entity.description {
                    Some(description) => format!("{} ({})", entity.name, description),
                    None => entity.name.clone(),
                })
                .collect::<Vec<_>>()
                .join("; ");
            format!("- {category}: {names}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn summarize_connections(connections: &[Connection]) -> String {
    if connections.is_empty() {
        return "(none)".to_string();
    }

    connections
        .iter()
        .take(MAX_KNOWN_CONNECTIONS)
        .map(|connection| {
            format!(
                "- {} -> {} ({})",
                connection.from_entity, connection.to_entity, connection.connection_reason
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn summarize_themes(themes: &[Theme]) -> String {
    if themes.is_empty() {
        return "(none)".to_string();
    }

    themes
        .iter()
        .map(|theme| match &theme.description {
            Some(description) => format!("- {}: {}", theme.name, description),
            None => format!("- {}", theme.name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn summarize_prior_insights(prior: Option<&PriorInsights>) -> String {
    let Some(prior) = prior else {
        return "(none)".to_string();
    };

    let mut lines: Vec<String> = prior
        .cultural_insights
        .iter()
        .map(|insight| format!("- {insight}"))
        .collect();

    if let Some(narrative) = prior.narrative.as_ref().filter(|n| !n.trim().is_empty()) {
        lines.push(format!("- narrative: {narrative}"));
    }

    if lines.is_empty() {
        "(none)".to_string()
    } else {
        lines.join("\n")
    }
}
