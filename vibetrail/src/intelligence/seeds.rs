use serde::Deserialize;

use crate::error::{Result, VibeError};
use crate::llm::{prompts, CompletionOptions, LlmProvider};

use super::types::{Seed, SeedExtraction, VibeContext};

/// Wrapper for the seed-extraction reply. Models sometimes return the bare
/// array and sometimes the documented `{"seeds": [...]}` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SeedsReply {
    Array(Vec<Seed>),
    Wrapped {
        seeds: Vec<Seed>,
        #[serde(default, rename = "vibeContext")]
        vibe_context: Option<VibeContext>,
    },
}

/// Extracts taste seeds from a free-text vibe via one completion call.
///
/// There is no partial-success path here: a reply that does not parse as a
/// well-formed seed list fails the whole request.
#[derive(Debug, Clone)]
pub struct SeedExtractor {
    llm: LlmProvider,
}

impl SeedExtractor {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    pub async fn extract(&self, vibe: &str, city: &str) -> Result<SeedExtraction> {
        if vibe.trim().is_empty() {
            return Err(VibeError::Validation("vibe must not be empty".to_string()));
        }

        let prompt = prompts::seed_extraction_prompt(vibe, city);
        let options = CompletionOptions {
            temperature: Some(0.7),
            max_tokens: Some(800),
        };

        let reply: SeedsReply = self
            .llm
            .complete_structured(&prompt, Some(&options))
            .await?;

        let (mut seeds, vibe_context) = match reply {
            SeedsReply::Array(seeds) => (seeds, None),
            SeedsReply::Wrapped {
                seeds,
                vibe_context,
            } => (seeds, vibe_context),
        };

        if seeds.is_empty() {
            return Err(VibeError::Llm(
                "Seed extraction returned no seeds".to_string(),
            ));
        }

        for seed in &mut seeds {
            seed.confidence = seed.confidence.clamp(0.0, 1.0);
        }

        tracing::debug!(count = seeds.len(), "Extracted taste seeds");

        Ok(SeedExtraction {
            seeds,
            vibe_context,
        })
    }
}
