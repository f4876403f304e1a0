//! Day-plan request/response DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::services::planner::{DayPlan, DayPlanEntry, PlannedBy, SelectedItem};

/// Request body for `POST /v1/plan`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// The items the user picked from their recommendations.
    pub selected_items: Vec<SelectedItem>,
    /// City, for neighborhood-aware scheduling.
    #[serde(default)]
    pub city: Option<String>,
    /// Free-form scheduling preferences ("no early mornings", ...).
    #[serde(default)]
    pub preferences: Option<String>,
}

/// Response body for `POST /v1/plan`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// One entry per selected item, in schedule order.
    pub plan: Vec<DayPlanEntry>,
    /// Which path produced the schedule: `"llm"` or `"fallback"`.
    pub planned_by: PlannedBy,
}

impl From<DayPlan> for PlanResponse {
    fn from(plan: DayPlan) -> Self {
        Self {
            plan: plan.entries,
            planned_by: plan.planned_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_request_deserializes_items_with_defaults() {
        let json = r#"{
            "selectedItems": [
                {"name": "Blue Note Cafe", "category": "food"},
                {"name": "Museum of Neon", "category": "activity", "durationMinutes": 45}
            ],
            "preferences": "no early mornings"
        }"#;
        let req: PlanRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(req.selected_items.len(), 2);
        assert!(req.selected_items[0].duration_minutes.is_none());
        assert_eq!(req.selected_items[1].duration_minutes, Some(45));
        assert!(req.city.is_none());
    }

    #[test]
    fn plan_request_rejects_missing_selected_items() {
        let json = r#"{"preferences": "whatever"}"#;
        assert!(serde_json::from_str::<PlanRequest>(json).is_err());
    }

    #[test]
    fn planned_by_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(PlannedBy::Fallback).expect("serialize"),
            "fallback"
        );
        assert_eq!(serde_json::to_value(PlannedBy::Llm).expect("serialize"), "llm");
    }
}
