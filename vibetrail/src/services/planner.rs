use serde::{Deserialize, Serialize};

use crate::error::{Result, VibeError};
use crate::llm::{prompts, CompletionOptions, LlmProvider, StructuredReply};

/// An item the user picked for their day.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectedItem {
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Estimated visit length. When absent, a category default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

/// One of the five schedule periods a slot can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanPeriod {
    Morning,
    LateMorning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlannedItem {
    pub name: String,
    pub category: String,
    pub duration_minutes: u32,
    pub reasoning: String,
}

/// One scheduled slot in the day plan.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayPlanEntry {
    pub time_slot: String,
    pub period: PlanPeriod,
    pub item: PlannedItem,
}

/// Which path produced the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlannedBy {
    Llm,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub entries: Vec<DayPlanEntry>,
    pub planned_by: PlannedBy,
}

/// Wrapper for the planner reply. Models sometimes return the bare array and
/// sometimes wrap it in an object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PlanReply {
    Array(Vec<DayPlanEntry>),
    Wrapped {
        #[serde(alias = "schedule", alias = "entries")]
        plan: Vec<DayPlanEntry>,
    },
}

impl PlanReply {
    fn into_entries(self) -> Vec<DayPlanEntry> {
        match self {
            Self::Array(entries) => entries,
            Self::Wrapped { plan } => plan,
        }
    }
}

const FALLBACK_SLOTS: [&str; 5] = ["9:00 AM", "11:30 AM", "2:00 PM", "5:00 PM", "7:30 PM"];
const FALLBACK_PERIODS: [PlanPeriod; 5] = [
    PlanPeriod::Morning,
    PlanPeriod::LateMorning,
    PlanPeriod::Afternoon,
    PlanPeriod::Evening,
    PlanPeriod::Night,
];
/// Slot duration when the item carries no estimate on the fallback path.
const FALLBACK_DURATION_MINUTES: u32 = 90;

/// Category default for an item's estimated duration, used when building the
/// schedule prompt.
fn default_duration_minutes(category: &str) -> u32 {
    match category.to_lowercase().as_str() {
        "food" => 90,
        "activity" | "activities" => 120,
        _ => 60,
    }
}

/// Builds a time-ordered day plan from the user's selected items.
///
/// The primary path asks the completion service for a schedule honoring the
/// planning heuristics. Any reply that fails to parse, or that does not carry
/// exactly one slot per item, falls back to a deterministic round-robin
/// assignment, as does any transport failure. Missing LLM configuration is a
/// different class: it surfaces as an error before any completion is
/// attempted, never as a silent fallback.
#[derive(Debug, Clone)]
pub struct DayPlanner {
    llm: LlmProvider,
}

impl DayPlanner {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    pub async fn plan(
        &self,
        items: &[SelectedItem],
        city: Option<&str>,
        preferences: Option<&str>,
    ) -> Result<DayPlan> {
        if !self.llm.is_available() {
            return Err(VibeError::LlmUnavailable(
                "Day planning requires a configured LLM".to_string(),
            ));
        }

        let prompt = prompts::day_plan_prompt(&items_block(items), city, preferences);
        let options = CompletionOptions {
            temperature: Some(0.6),
            max_tokens: Some(1200),
        };

        match self
            .llm
            .complete_structured_or_raw::<PlanReply>(&prompt, Some(&options))
            .await
        {
            Ok(StructuredReply::Parsed(reply)) => {
                let entries = reply.into_entries();
                if entries.len() == items.len() {
                    Ok(DayPlan {
                        entries,
                        planned_by: PlannedBy::Llm,
                    })
                } else {
                    tracing::warn!(
                        expected = items.len(),
                        got = entries.len(),
                        "LLM plan cardinality mismatch, using fallback"
                    );
                    Ok(fallback_plan(items))
                }
            }
            Ok(StructuredReply::Unparsed { raw, reason }) => {
                tracing::warn!(
                    reason = %reason,
                    raw_preview = %raw.chars().take(100).collect::<String>(),
                    "LLM plan did not parse, using fallback"
                );
                Ok(fallback_plan(items))
            }
            // Credential and availability problems are surfaced, not planned
            // around. Only transport and parse failures get the fallback.
            Err(error @ (VibeError::Configuration(_) | VibeError::LlmUnavailable(_))) => Err(error),
            Err(error) => {
                tracing::warn!(error = %error, "LLM plan request failed, using fallback");
                Ok(fallback_plan(items))
            }
        }
    }
}

/// Render the selected items for the schedule prompt, one line per item with
/// its estimated duration.
fn items_block(items: &[SelectedItem]) -> String {
    items
        .iter()
        .map(|item| {
            let duration = item
                .duration_minutes
                .unwrap_or_else(|| default_duration_minutes(&item.category));
            let mut line = format!("- {} ({}, ~{} min", item.name, item.category, duration);
            if let Some(location) = item.location.as_ref().filter(|l| !l.trim().is_empty()) {
                line.push_str(&format!(", in {location}"));
            }
            line.push(')');
            if let Some(description) = item.description.as_ref().filter(|d| !d.trim().is_empty()) {
                line.push_str(&format!(": {description}"));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Deterministic schedule: items in their original order over a fixed cycle
/// of five start times and periods. Output cardinality always equals input
/// cardinality.
fn fallback_plan(items: &[SelectedItem]) -> DayPlan {
    let entries = items
        .iter()
        .enumerate()
        .map(|(index, item)| DayPlanEntry {
            time_slot: FALLBACK_SLOTS[index % FALLBACK_SLOTS.len()].to_string(),
            period: FALLBACK_PERIODS[index % FALLBACK_PERIODS.len()],
            item: PlannedItem {
                name: item.name.clone(),
                category: item.category.clone(),
                duration_minutes: item.duration_minutes.unwrap_or(FALLBACK_DURATION_MINUTES),
                reasoning: "Scheduled in selection order".to_string(),
            },
        })
        .collect();

    DayPlan {
        entries,
        planned_by: PlannedBy::Fallback,
    }
}
