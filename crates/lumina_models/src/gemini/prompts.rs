//! Prompt construction for the Gemini backend.
//!
//! Prompts are terse instructions with oversized inputs truncated and the
//! expected reply shape pinned by a separate format message, so the repair
//! parser downstream sees close-to-valid JSON.

use lumina_interface::{ChartInsightRequest, OutlineRequest, SlideContentRequest, VisualPlanRequest};

/// Longest merged document context spliced into an outline prompt.
pub const OUTLINE_CONTEXT_LIMIT: usize = 5000;
/// Longest topic spliced into a content prompt.
pub const CONTENT_TOPIC_LIMIT: usize = 1000;

/// Layout names accepted in replies, matching the deck layout set.
const LAYOUT_NAMES: &str = "title, content, two-column, image, image-center, image-full, data, \
                            quote, timeline, grid, big-number, process, comparison, hierarchy, \
                            map, case-study";

/// Reply format for outline synthesis.
pub const OUTLINE_FORMAT: &str = "Respond with a JSON array of objects, each with string fields \
                                  \"title\" and \"intent\". Output only JSON.";

/// Reply format for style analysis over the SDK surface.
pub const STYLE_FORMAT: &str = "Respond with a JSON object: {\"description\": string, \
                                \"colors\": {\"backgroundColor\": string, \"textColor\": string, \
                                \"accentColor\": string, \"secondaryColor\": string, \
                                \"isDark\": boolean}}. Colors are hex strings. Output only JSON.";

/// Reply format for chart insights.
pub const INSIGHT_FORMAT: &str = "Respond with a JSON array of objects with string fields \
                                  \"value\", \"text\", and \"position\". Output only JSON.";

/// Instruction paired with a reference image for style analysis.
pub const STYLE_IMAGE_PROMPT: &str =
    "Analyze presentation style. Return JSON colors and description.";

/// Reply format for visual planning.
pub fn plan_format() -> String {
    format!(
        "Respond with a JSON object with fields \"layout\" and \"imagePrompt\". \"layout\" must \
         be one of: {LAYOUT_NAMES}. Output only JSON."
    )
}

/// Reply format for slide-content synthesis.
pub fn content_format() -> String {
    format!(
        "Respond with a JSON object. Required fields: \"title\", \"layout\", \"contentPoints\", \
         \"imagePrompt\". Optional fields: \"subtitle\", \"speakerNotes\", \"conclusion\", \
         \"bigNumber\", \"bigNumberLabel\", \"quoteAuthor\". \"layout\" must be one of: \
         {LAYOUT_NAMES}. \"contentPoints\" is an array of strings. Output only JSON."
    )
}

/// Reply schema for style analysis over the REST surface.
pub fn style_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "description": {"type": "STRING"},
            "colors": {
                "type": "OBJECT",
                "properties": {
                    "backgroundColor": {"type": "STRING"},
                    "textColor": {"type": "STRING"},
                    "accentColor": {"type": "STRING"},
                    "secondaryColor": {"type": "STRING"},
                    "isDark": {"type": "BOOLEAN"}
                }
            }
        }
    })
}

/// Outline synthesis prompt.
pub fn outline(req: &OutlineRequest) -> String {
    format!(
        "Create {} slides in {} for topic: {}. Context: {}. Return JSON array of {{title, intent}}.",
        req.slide_count(),
        req.language(),
        req.topic(),
        truncate(req.doc_context(), OUTLINE_CONTEXT_LIMIT),
    )
}

/// Visual planning prompt for one outline item.
pub fn visual_plan(req: &VisualPlanRequest) -> String {
    format!(
        "Determine best layout and image prompt for slide \"{}\". Style: {}. Return JSON: {{layout, imagePrompt}}",
        req.item().title,
        req.style_description(),
    )
}

/// Slide-content synthesis prompt.
pub fn slide_content(req: &SlideContentRequest) -> String {
    let plan = req
        .plan()
        .as_ref()
        .and_then(|plan| serde_json::to_string(plan).ok())
        .unwrap_or_else(|| "None".to_string());
    format!(
        "Generate slide content for: \"{}\"\nContext: {}\nStyle: {}\nVisual Context: {}\n\nLanguage: {}. Return JSON.",
        req.item().title,
        truncate(req.topic(), CONTENT_TOPIC_LIMIT),
        req.style_description(),
        plan,
        req.language(),
    )
}

/// Image synthesis prompt, decorated for presentation visuals.
pub fn image(prompt: &str) -> String {
    format!(
        "High-fidelity professional presentation slide visual: {prompt}. Professional corporate aesthetics, 4k, clean composition."
    )
}

/// Chart insight prompt with the rows serialized inline.
pub fn chart_insights(req: &ChartInsightRequest) -> String {
    let data = serde_json::to_string(req.rows()).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Analyze chart \"{}\" data: {}. Generate 2-3 insights. Return JSON array of {{value, text, position: 'top-left'|'top-right'|'bottom-left'|'bottom-right'}}.",
        req.chart_title(),
        data,
    )
}

/// Palette synthesis prompt from a text description.
pub fn style_from_text(description: &str) -> String {
    format!("Generate palette for: \"{description}\". Return JSON.")
}

/// Brainstorm prompt.
pub fn brainstorm(query: &str) -> String {
    format!("Brainstorm angles for: {query}.")
}

/// Assistant chat prompt with the deck context prepended.
pub fn chat(query: &str, context: &str) -> String {
    format!("Context: {context}\n\nQuestion: {query}")
}

/// Truncates to at most `limit` characters, respecting char boundaries.
fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
