//! Prompt templates for the completion service
//!
//! These templates use basic `format!()` interpolation for type safety.
//! Missing variables will cause compile-time errors.

/// Generate a prompt for extracting taste seeds from a free-text vibe.
///
/// Instructs the model to return 3-5 seed objects plus an advisory vibe
/// context as a single JSON object.
///
/// # Example
/// ```
/// use vibetrail::llm::prompts::seed_extraction_prompt;
///
/// let prompt = seed_extraction_prompt("rainy day, slow jazz, old bookstores", "Portland");
/// assert!(prompt.contains("old bookstores"));
/// assert!(prompt.contains("Portland"));
/// ```
pub fn seed_extraction_prompt(vibe: &str, city: &str) -> String {
    format!(
        r#"You are a cultural taste analyst. A user described the vibe they want for a day in {city}.

Extract 3-5 concrete search seeds from the vibe. Each seed is a short phrase a
recommendation engine can search for, with a category, a confidence score, and
related search terms.

Categories:
- food: cuisine, dining, or drink related
- activity: places to go or things to do
- media: movies, TV, music, or books
- general: anything else that signals taste

Confidence: a score from 0.0 to 1.0 indicating how strongly the vibe implies this seed.

Also derive an advisory vibeContext describing the vibe's time of day,
indoor/outdoor lean, social size, mood, pace, and price range. Omit any
attribute the vibe does not imply.

Vibe:
{vibe}

Respond with valid JSON only, no prose. Example format:
{{
  "seeds": [
    {{"text": "cozy jazz bars", "category": "activity", "confidence": 0.9, "searchTerms": ["jazz club", "live music bar"]}},
    {{"text": "french bistro", "category": "food", "confidence": 0.8, "searchTerms": ["bistro", "wine bar"]}},
    {{"text": "noir films", "category": "media", "confidence": 0.7, "searchTerms": ["film noir", "classic cinema"]}}
  ],
  "vibeContext": {{"timeOfDay": "evening", "indoorOutdoor": "indoor", "mood": "relaxed", "pace": "slow"}}
}}"#
    )
}

/// Generate a prompt for cross-domain ecosystem analysis.
///
/// The summary blocks are pre-rendered by the analyzer so this template stays
/// a plain interpolation.
pub fn ecosystem_prompt(
    vibe: &str,
    city: &str,
    entity_summary: &str,
    connection_summary: &str,
    theme_summary: &str,
    insight_summary: &str,
) -> String {
    format!(
        r#"You are a cultural analyst mapping the psychological and cultural threads that
connect a person's taste across domains (food, places, film, TV, music, books).

The user's vibe: {vibe}
The city: {city}

Recommended entities by category:
{entity_summary}

Connections already known:
{connection_summary}

Themes already known:
{theme_summary}

Prior insights:
{insight_summary}

Find NEW cross-domain connections and themes not already listed above.

Respond with valid JSON only, no prose. Example format:
{{
  "connections": [
    {{"fromEntity": "Blue Note Cafe", "toEntity": "Kind of Blue", "connectionStrength": 0.85, "connectionReason": "both trade in late-night intimacy", "sharedThemes": ["intimacy", "improvisation"]}}
  ],
  "themes": [
    {{"name": "quiet nostalgia", "strength": 0.8, "description": "a pull toward analog, lived-in spaces", "supportingEntityTypes": ["food", "music", "books"]}}
  ],
  "culturalInsights": ["This taste profile favors spaces built for lingering."],
  "narrative": "One short paragraph tying the day together."
}}"#
    )
}

/// Generate a prompt for building a full-day schedule from selected items.
///
/// # Example
/// ```
/// use vibetrail::llm::prompts::day_plan_prompt;
///
/// let prompt = day_plan_prompt("- Blue Note Cafe (food, ~90 min)", Some("Chicago"), None);
/// assert!(prompt.contains("Blue Note Cafe"));
/// assert!(prompt.contains("Chicago"));
/// ```
pub fn day_plan_prompt(items_block: &str, city: Option<&str>, preferences: Option<&str>) -> String {
    let city_line = city
        .filter(|value| !value.trim().is_empty())
        .map(|value| format!("The day takes place in {value}.\n"))
        .unwrap_or_default();

    let preferences_block = preferences
        .filter(|value| !value.trim().is_empty())
        .map(|value| format!("User preferences to honor where possible:\n{value}\n\n"))
        .unwrap_or_default();

    format!(
        r#"You are a day planner. Schedule ALL of the following selected items into a
single day, one time slot per item, in a sensible order.

{city_line}Selected items:
{items_block}

{preferences_block}Scheduling rules:
- Never place two food items in immediately adjacent slots.
- Group items that share a neighborhood or location to minimize transitions.
- Respect standard meal windows when possible: breakfast 8-10 AM, lunch 12-2 PM, dinner 6-8 PM.
- Assume typical business hours for venues.
- Every slot's "period" must be one of: morning, late_morning, afternoon, evening, night.

Respond with valid JSON only, no prose: an array with exactly one entry per
selected item, in schedule order. Example format:
[
  {{"timeSlot": "9:00 AM", "period": "morning", "item": {{"name": "Blue Note Cafe", "category": "food", "durationMinutes": 90, "reasoning": "breakfast window, quiet start"}}}},
  {{"timeSlot": "11:30 AM", "period": "late_morning", "item": {{"name": "Museum of Art", "category": "activity", "durationMinutes": 120, "reasoning": "next door to the cafe"}}}}
]"#
    )
}
