//! Slide data model.
//!
//! A [`Slide`] is a flat record with optional, layout-dependent fields; the
//! [`SlideLayout`] discriminant tells the renderer which of them matter. The
//! wire shape is camelCase JSON, matching what the generation backend is
//! prompted to return.

use serde::{Deserialize, Serialize};

/// Presentation layout kinds.
///
/// Serialized kebab-case on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SlideLayout {
    /// Opening slide with title and subtitle
    Title,
    /// Standard bullet-point slide
    Content,
    /// Two side-by-side text columns
    TwoColumn,
    /// Text with a supporting image
    Image,
    /// Centered image with caption text
    ImageCenter,
    /// Full-bleed image
    ImageFull,
    /// Chart-led slide
    Data,
    /// Single quotation with attribution
    Quote,
    /// Dated step sequence
    Timeline,
    /// Card grid of short items
    Grid,
    /// One dominant figure with a label
    BigNumber,
    /// Ordered process steps
    Process,
    /// Myth-versus-reality table
    Comparison,
    /// Tree-structured relationships
    Hierarchy,
    /// Geographic emphasis
    Map,
    /// Narrative case study
    CaseStudy,
}

impl Default for SlideLayout {
    fn default() -> Self {
        Self::Content
    }
}

/// One row of simple chart data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Axis label for this row
    pub label: String,
    /// Numeric value
    pub value: f64,
}

/// Simple chart rendering kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChartKind {
    /// Vertical bars
    Bar,
    /// Connected line
    Line,
    /// Pie segments
    Pie,
}

impl Default for ChartKind {
    fn default() -> Self {
        Self::Bar
    }
}

/// Corner anchor for a callout annotation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CalloutPosition {
    /// Upper-left corner
    TopLeft,
    /// Upper-right corner
    TopRight,
    /// Lower-left corner
    BottomLeft,
    /// Lower-right corner
    BottomRight,
}

/// Annotation anchored to one corner of a chart or visual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    /// Insight text
    pub text: String,
    /// Highlighted value
    pub value: String,
    /// Corner anchor
    pub position: CalloutPosition,
}

/// One step on a timeline layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
    /// Date or period label
    pub date: String,
    /// Step title
    pub title: String,
    /// Step description
    pub description: String,
}

/// One card on a grid layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    /// Card title
    pub title: String,
    /// Card body
    pub description: String,
    /// Optional icon hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One step on a process layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    /// Step title
    pub title: String,
    /// Step description
    pub description: String,
    /// Optional sub-points under the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_points: Option<Vec<String>>,
}

/// One row on a comparison layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonItem {
    /// Feature being compared
    pub feature: String,
    /// The common misconception
    pub myth: String,
    /// The corrected statement
    pub reality: String,
    /// Optional supporting figure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reality_value: Option<String>,
}

/// Image synthesis outcome for a slide.
///
/// Three-valued by design: the wire shape distinguishes "never attempted"
/// (field absent), "attempted and failed" (`null`), and "succeeded" (data
/// URI string), and the renderer treats each differently.
///
/// # Examples
///
/// ```
/// use lumina_core::{ImageState, Slide};
///
/// let mut slide = Slide::default();
/// assert!(slide.image.is_not_attempted());
///
/// slide.image = ImageState::Ready("data:image/png;base64,AAAA".into());
/// let json = serde_json::to_string(&slide).unwrap();
/// assert!(json.contains("\"imageUrl\":\"data:image/png"));
///
/// slide.image = ImageState::Failed;
/// let json = serde_json::to_string(&slide).unwrap();
/// assert!(json.contains("\"imageUrl\":null"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageState {
    /// No synthesis attempted yet
    #[default]
    NotAttempted,
    /// Synthesis attempted, no usable result
    Failed,
    /// Synthesis succeeded; holds the data URI
    Ready(String),
}

impl ImageState {
    /// True when no synthesis has been attempted.
    pub fn is_not_attempted(&self) -> bool {
        matches!(self, ImageState::NotAttempted)
    }

    /// The data URI, when ready.
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageState::Ready(uri) => Some(uri),
            _ => None,
        }
    }
}

impl Serialize for ImageState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            // NotAttempted is skipped at the field level; if it gets here
            // anyway, null is the closest wire shape.
            ImageState::NotAttempted | ImageState::Failed => serializer.serialize_none(),
            ImageState::Ready(uri) => serializer.serialize_str(uri),
        }
    }
}

impl<'de> Deserialize<'de> for ImageState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(match value {
            Some(uri) => ImageState::Ready(uri),
            None => ImageState::Failed,
        })
    }
}

/// The central entity: one slide of the deck.
///
/// The `id` is assigned from the originating outline item and is the join
/// key across all pipeline stages and history snapshots; it is never
/// regenerated. `content_points` order is display order.
///
/// # Examples
///
/// ```
/// use lumina_core::{Slide, SlideLayout};
///
/// let slide = Slide {
///     id: "slide-1712000000000-0".to_string(),
///     title: "Market Overview".to_string(),
///     content_points: vec!["Growth".to_string(), "Risks".to_string()],
///     ..Slide::default()
/// };
/// assert_eq!(slide.layout, SlideLayout::Content);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Stable identifier, copied from the originating outline item
    #[serde(default)]
    pub id: String,
    /// Slide title
    #[serde(default)]
    pub title: String,
    /// Leading summary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Layout discriminant for rendering
    #[serde(default)]
    pub layout: SlideLayout,
    /// Ordered bullet points; order is display order
    #[serde(default)]
    pub content_points: Vec<String>,
    /// Prompt used for image synthesis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    /// Image synthesis outcome
    #[serde(
        default,
        rename = "imageUrl",
        skip_serializing_if = "ImageState::is_not_attempted"
    )]
    pub image: ImageState,
    /// Presenter notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_notes: Option<String>,
    /// Steps for the timeline layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline_steps: Option<Vec<TimelineStep>>,
    /// Cards for the grid layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_items: Option<Vec<GridItem>>,
    /// Steps for the process layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_steps: Option<Vec<ProcessStep>>,
    /// Rows for the comparison layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_items: Option<Vec<ComparisonItem>>,
    /// Dominant figure for the big-number layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub big_number: Option<String>,
    /// Label under the dominant figure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub big_number_label: Option<String>,
    /// Attribution for the quote layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_author: Option<String>,
    /// Simple chart rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Vec<ChartRow>>,
    /// Simple chart kind
    #[serde(default, rename = "chartType", skip_serializing_if = "Option::is_none")]
    pub chart_kind: Option<ChartKind>,
    /// Corner annotations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callouts: Option<Vec<Callout>>,
    /// Footer conclusion line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
}

impl Slide {
    /// Create the pre-generation stub for an outline item.
    ///
    /// The stub carries the item's id and title, the default layout, and no
    /// content; the pipeline fills the rest in stage by stage.
    pub fn stub(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}
