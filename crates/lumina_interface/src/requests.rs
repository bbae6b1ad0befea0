//! Request records for driver operations.

use crate::VisualPlan;
use derive_builder::Builder;
use derive_getters::Getters;
use lumina_core::{
    ChartRow, ExportFormat, ImageSize, Language, ModelTier, OutlineItem, PresentationFormat,
};
use serde::{Deserialize, Serialize};

/// Inputs for outline synthesis.
///
/// # Examples
///
/// ```
/// use lumina_interface::OutlineRequest;
/// use lumina_core::Language;
///
/// let req = OutlineRequest::builder()
///     .topic("Offshore wind economics")
///     .doc_context("")
///     .slide_count(8usize)
///     .language(Language::English)
///     .build()
///     .unwrap();
/// assert_eq!(*req.slide_count(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OutlineRequest {
    /// Presentation topic
    topic: String,
    /// Merged source-document context
    #[builder(default)]
    doc_context: String,
    /// Number of slides to outline
    slide_count: usize,
    /// Output language
    #[builder(default)]
    language: Language,
}

impl OutlineRequest {
    /// Creates a new builder for `OutlineRequest`.
    pub fn builder() -> OutlineRequestBuilder {
        OutlineRequestBuilder::default()
    }
}

/// Inputs for per-slide visual planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct VisualPlanRequest {
    /// Presentation topic
    topic: String,
    /// The outline item being planned
    item: OutlineItem,
    /// Prompt-facing style description
    style_description: String,
}

impl VisualPlanRequest {
    /// Creates a new builder for `VisualPlanRequest`.
    pub fn builder() -> VisualPlanRequestBuilder {
        VisualPlanRequestBuilder::default()
    }
}

/// Inputs for full slide-content synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct SlideContentRequest {
    /// Presentation topic
    topic: String,
    /// The outline item being expanded
    item: OutlineItem,
    /// Prompt-facing style description
    style_description: String,
    /// Output language
    #[builder(default)]
    language: Language,
    /// Content-depth mode
    #[builder(default)]
    presentation_format: PresentationFormat,
    /// Target export medium
    #[builder(default)]
    export_format: ExportFormat,
    /// Model quality tier
    #[builder(default)]
    tier: ModelTier,
    /// Visual plan from the planning stage, when one ran
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    plan: Option<VisualPlan>,
}

impl SlideContentRequest {
    /// Creates a new builder for `SlideContentRequest`.
    pub fn builder() -> SlideContentRequestBuilder {
        SlideContentRequestBuilder::default()
    }
}

/// Inputs for image synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Scene description for the visual
    prompt: String,
    /// Requested resolution tier
    #[builder(default)]
    size: ImageSize,
    /// Model quality tier
    #[builder(default)]
    tier: ModelTier,
    /// Optional style-reference image as a data URI
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style_reference: Option<String>,
}

impl ImageRequest {
    /// Creates a new builder for `ImageRequest`.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// Inputs for chart-insight suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChartInsightRequest {
    /// Title of the chart being analyzed
    chart_title: String,
    /// The chart's data rows
    rows: Vec<ChartRow>,
}

impl ChartInsightRequest {
    /// Creates a new builder for `ChartInsightRequest`.
    pub fn builder() -> ChartInsightRequestBuilder {
        ChartInsightRequestBuilder::default()
    }
}
