//! Trait definitions for generation backends.

use crate::{
    ChartInsightRequest, ChatStream, ImageRequest, OutlineRequest, SlideContentRequest, TextStream,
    VisualPlan, VisualPlanRequest,
};
use async_trait::async_trait;
use lumina_core::{AnalyzedStyle, Callout, ImageState, OutlineItem, Slide};
use lumina_error::LuminaResult;

/// Core trait that all generation backends must implement.
///
/// Every operation absorbs its own transport and parse failures and resolves
/// to a stage-local default (empty outline, default plan, placeholder slide,
/// failed image, corporate palette, empty insights) so a single bad response
/// never aborts a pipeline run. The one exception is an authorization
/// failure, which is returned as an error so the session layer can drop its
/// readiness flag.
#[async_trait]
pub trait LuminaDriver: Send + Sync {
    /// Synthesize an ordered outline for the topic.
    ///
    /// Items come back with ids assigned and missing titles/intents filled
    /// with defaults. Resolves to an empty list on failure.
    async fn synthesize_outline(&self, req: &OutlineRequest) -> LuminaResult<Vec<OutlineItem>>;

    /// Plan the layout and image prompt for one slide.
    ///
    /// Resolves to the default plan (content layout, empty prompt) on
    /// failure.
    async fn plan_slide_visual(&self, req: &VisualPlanRequest) -> LuminaResult<VisualPlan>;

    /// Synthesize the full content of one slide.
    ///
    /// The result carries the outline item's id. Resolves to a stub slide
    /// with a visible error content point on failure.
    async fn synthesize_slide_content(&self, req: &SlideContentRequest) -> LuminaResult<Slide>;

    /// Synthesize a slide visual.
    ///
    /// Resolves to [`ImageState::Failed`] when the backend produces no
    /// usable image.
    async fn synthesize_image(&self, req: &ImageRequest) -> LuminaResult<ImageState>;

    /// Extract a style description and palette from a reference image.
    ///
    /// `image_base64` is the raw base64 payload without a data-URI prefix.
    /// Resolves to the corporate default on failure.
    async fn analyze_style_from_image(&self, image_base64: &str) -> LuminaResult<AnalyzedStyle>;

    /// Derive a style description and palette from free text.
    ///
    /// Resolves to the corporate palette with the input as description on
    /// failure.
    async fn analyze_style_from_text(&self, prompt: &str) -> LuminaResult<AnalyzedStyle>;

    /// Suggest two to three callout insights for a chart.
    ///
    /// Resolves to an empty list on failure.
    async fn suggest_chart_insights(&self, req: &ChartInsightRequest) -> LuminaResult<Vec<Callout>>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used for content synthesis.
    fn model_name(&self) -> &str;
}

/// Trait for backends that support the streamed assistant surface.
#[async_trait]
pub trait Assistant: LuminaDriver {
    /// Answer a question about the deck, streaming fragments with grounding
    /// sources.
    ///
    /// The stream is finite and closes when the service ends it. Grounding
    /// URIs are deduplicated across the whole stream, so each source
    /// appears on the first chunk that cites it. When the connection cannot
    /// be established the stream carries a single error-text chunk with no
    /// sources; an interruption mid-stream surfaces as an error item.
    async fn stream_chat(&self, query: &str, context: &str) -> LuminaResult<ChatStream>;

    /// Brainstorm presentation angles, streaming plain text fragments.
    ///
    /// When the connection cannot be established the stream carries a
    /// single error-text fragment; an interruption mid-stream surfaces as
    /// an error item.
    async fn stream_brainstorm(&self, query: &str) -> LuminaResult<TextStream>;
}
